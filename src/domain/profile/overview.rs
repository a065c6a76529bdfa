//! Overview paragraph.

use crate::domain::analysis::{ProjectType, RepositoryAnalysis};
use crate::domain::foundation::Timestamp;
use crate::domain::repository::UserRecord;

/// Number of technologies named in the overview.
const OVERVIEW_TECHNOLOGY_LIMIT: usize = 5;

const QUALITY_CLOSER: &str = "I'm committed to writing clean, maintainable code and delivering high-quality solutions that meet client requirements.";

const COMMUNICATION_CLOSER: &str = "I believe in clear communication, timely delivery, and building long-term relationships with clients.";

/// Builds the overview paragraph.
///
/// Clauses are emitted in a fixed order and joined by single spaces. The
/// experience, specialization, technology and project-count clauses are
/// omitted when they would be empty or zero.
pub fn generate_overview(
    user: &UserRecord,
    project_count: usize,
    analysis: &RepositoryAnalysis,
    now: &Timestamp,
) -> String {
    let mut clauses = Vec::new();

    clauses.push(match user.display_name() {
        Some(name) => format!("I'm {}, a passionate software developer", name),
        None => "I'm a passionate software developer".to_string(),
    });

    let years = user.years_of_experience(now);
    if years > 0 {
        clauses.push(format!("with {} years of experience", years));
    }

    if let Some(clause) = specialization_clause(&analysis.unique_project_types()) {
        clauses.push(clause);
    }

    let technologies: Vec<&str> = analysis
        .technologies
        .iter()
        .take(OVERVIEW_TECHNOLOGY_LIMIT)
        .map(String::as_str)
        .collect();
    if !technologies.is_empty() {
        clauses.push(format!(
            "using modern technologies like {}",
            technologies.join(", ")
        ));
    }

    if project_count > 0 {
        clauses.push(format!("I've successfully delivered {} projects", project_count));
    }

    clauses.push(QUALITY_CLOSER.to_string());
    clauses.push(COMMUNICATION_CLOSER.to_string());

    clauses.join(" ")
}

/// `"specializing in x development"` or `"specializing in a, b and c development"`.
fn specialization_clause(types: &[ProjectType]) -> Option<String> {
    let labels: Vec<String> = types.iter().map(|t| t.label().to_lowercase()).collect();
    match labels.split_last() {
        None => None,
        Some((only, [])) => Some(format!("specializing in {} development", only)),
        Some((last, rest)) => Some(format!(
            "specializing in {} and {} development",
            rest.join(", "),
            last
        )),
    }
}
