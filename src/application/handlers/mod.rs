//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod profile;
pub mod proposal;

pub use profile::{GenerateProfileCommand, GenerateProfileHandler, GenerateProfileResult};
pub use proposal::{GenerateProposalCommand, GenerateProposalHandler, GenerateProposalResult};
