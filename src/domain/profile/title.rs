//! Profile title.

use crate::domain::analysis::{ProjectType, RepositoryAnalysis};

/// Title used when no language information exists.
pub const FALLBACK_TITLE: &str = "Software Developer";

/// Project types that imply a role, in priority order.
const ROLE_RULES: &[(ProjectType, &str)] = &[
    (ProjectType::WebApplication, "Full Stack Developer"),
    (ProjectType::ApiBackend, "Backend Developer"),
    (ProjectType::MobileApplication, "Mobile Developer"),
    (ProjectType::DataScience, "Data Scientist"),
];

/// Role label for the analysis, `"Software Developer"` when nothing matches.
pub fn role_for(analysis: &RepositoryAnalysis) -> &'static str {
    ROLE_RULES
        .iter()
        .find(|(project_type, _)| analysis.has_project_type(*project_type))
        .map(|(_, role)| *role)
        .unwrap_or(FALLBACK_TITLE)
}

/// Builds `"<role> | <lang1> | <lang2>"` from the two heaviest languages.
///
/// # Edge Cases
/// - No languages: exactly [`FALLBACK_TITLE`]
/// - One language: `"<role> | <lang>"`
pub fn generate_title(analysis: &RepositoryAnalysis) -> String {
    let top = analysis.top_languages(3);
    if top.is_empty() {
        return FALLBACK_TITLE.to_string();
    }

    let mut parts = vec![role_for(analysis)];
    parts.extend(top.into_iter().take(2));
    parts.join(" | ")
}
