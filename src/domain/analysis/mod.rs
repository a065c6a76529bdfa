//! Analysis Module - Pure domain services for repository analysis.
//!
//! # Components
//!
//! - `rules` - Ordered keyword tables for project types and technologies
//! - `RepositoryAnalyzer` - Language weights, technology set, project types,
//!   totals, recent and top projects
//!
//! All functions are pure (no side effects) and stateless. They take
//! repository records as input and return computed results.

mod repository_analyzer;
mod rules;

pub use repository_analyzer::{
    RepositoryAnalysis, RepositoryAnalyzer, RECENT_WINDOW_DAYS, TOP_PROJECTS_LIMIT,
};
pub use rules::{
    classify_project, first_match, technologies_in, KeywordRule, ProjectType,
    PROJECT_TYPE_RULES, TECHNOLOGY_VOCABULARY,
};
