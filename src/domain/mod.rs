//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, timestamps, usernames)
//! - `repository` - Repository and user records fetched from the host
//! - `analysis` - Pure repository analysis (languages, technologies, project types)
//! - `profile` - Profile copy generation from an analysis

pub mod analysis;
pub mod foundation;
pub mod profile;
pub mod repository;
