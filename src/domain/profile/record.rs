//! Generated profile content.

use serde::{Deserialize, Serialize};

/// The five generated profile fields, built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub title: String,
    pub overview: String,
    /// Categorized skills markup.
    pub skills: String,
    /// Numbered project blurbs markup.
    pub portfolio_projects: String,
    /// Spoken self-introduction followed by speaking tips.
    pub transcription: String,
}
