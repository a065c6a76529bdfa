//! Spoken self-introduction context and speaking tips.

use serde::Serialize;

use crate::domain::analysis::{ProjectType, RepositoryAnalysis};
use crate::domain::foundation::Timestamp;
use crate::domain::repository::{RepositoryRecord, UserRecord};

const CONTEXT_LANGUAGE_LIMIT: usize = 3;
const NOTABLE_PROJECT_LIMIT: usize = 2;

/// Tips appended after the generated introduction.
pub const SPEAKING_TIPS: [&str; 5] = [
    "💡 Speaking Tips:",
    "• Speak at a natural pace - this should take about 2 minutes",
    "• Pause briefly after each sentence for clarity",
    "• Emphasize your key skills and project achievements",
    "• End with enthusiasm about the opportunity",
];

/// Everything a transcription writer is told about the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptionContext {
    pub name: Option<String>,
    pub username: String,
    pub years_of_experience: u32,
    pub total_projects: usize,
    /// Up to three languages, heaviest first.
    pub top_languages: Vec<String>,
    /// Deduplicated, first-seen order.
    pub project_types: Vec<ProjectType>,
    /// Up to two repository names.
    pub notable_projects: Vec<String>,
}

impl TranscriptionContext {
    pub fn build(
        user: &UserRecord,
        repos: &[RepositoryRecord],
        analysis: &RepositoryAnalysis,
        now: &Timestamp,
    ) -> Self {
        let notable_source = if analysis.top_projects.is_empty() {
            repos
        } else {
            analysis.top_projects.as_slice()
        };

        Self {
            name: user.display_name().map(str::to_string),
            username: user.username.clone(),
            years_of_experience: user.years_of_experience(now),
            total_projects: repos.len(),
            top_languages: analysis
                .top_languages(CONTEXT_LANGUAGE_LIMIT)
                .into_iter()
                .map(str::to_string)
                .collect(),
            project_types: analysis.unique_project_types(),
            notable_projects: notable_source
                .iter()
                .take(NOTABLE_PROJECT_LIMIT)
                .map(|repo| repo.name.clone())
                .collect(),
        }
    }
}

/// Appends [`SPEAKING_TIPS`] after a blank line.
pub fn with_speaking_tips(transcription: &str) -> String {
    format!("{}\n\n{}", transcription.trim(), SPEAKING_TIPS.join("\n"))
}
