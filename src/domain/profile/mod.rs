//! Profile Module - Generates freelancing profile copy from an analysis.
//!
//! # Components
//!
//! - `title` - Role plus strongest languages
//! - `overview` - Clause-based introduction paragraph
//! - `skills` - Category tables, skills markup and the short summary
//! - `portfolio` - Numbered project blurbs
//! - `transcription` - Context handed to the transcription writer
//! - `ProfileGenerator` - Assembles all five fields

mod generator;
mod overview;
mod portfolio;
mod record;
mod skills;
mod title;
mod transcription;

pub use generator::ProfileGenerator;
pub use overview::generate_overview;
pub use portfolio::{describe_project, generate_portfolio, NO_PROJECTS};
pub use record::ProfileRecord;
pub use skills::{
    categorize_language, categorize_technology, generate_skills, skills_summary, SkillCategory,
    LANGUAGE_CATEGORIES, TECHNOLOGY_CATEGORY_RULES,
};
pub use title::{generate_title, role_for, FALLBACK_TITLE};
pub use transcription::{with_speaking_tips, TranscriptionContext, SPEAKING_TIPS};
