//! HTTP adapter for profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalysisSummary, GenerateProfileRequest, GenerateProfileResponse};
pub use routes::profile_routes;
