//! Response types for service-level endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::HostRateLimit;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub config_loaded: bool,
    pub github_token_set: bool,
    pub openai_key_set: bool,
}

/// Body of `GET /api/github/rate-limit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResponse {
    pub limit: u64,
    pub remaining: u64,
    pub reset_time: u64,
    pub authenticated: bool,
}

impl From<HostRateLimit> for RateLimitResponse {
    fn from(rate: HostRateLimit) -> Self {
        Self {
            limit: rate.limit,
            remaining: rate.remaining,
            reset_time: rate.reset_time,
            authenticated: rate.authenticated,
        }
    }
}
