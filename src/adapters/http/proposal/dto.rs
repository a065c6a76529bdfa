//! Request/response types for the proposal endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::GenerateProposalResult;

/// Body of `POST /api/proposal/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateProposalRequest {
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateProposalResponse {
    pub message: String,
    pub tone: String,
    pub job_description_length: usize,
}

impl From<GenerateProposalResult> for GenerateProposalResponse {
    fn from(result: GenerateProposalResult) -> Self {
        Self {
            message: result.message,
            tone: result.tone,
            job_description_length: result.job_description_length,
        }
    }
}
