//! GitHub API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on pacing, so a typo cannot stall every request.
const MAX_REQUEST_INTERVAL_MS: u64 = 10_000;

/// GitHub API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubSettings {
    /// Default access token, used when a request carries none
    pub token: Option<Secret<String>>,

    /// REST API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Minimum spacing between outbound requests, in milliseconds
    #[serde(default = "default_min_request_interval")]
    pub min_request_interval_ms: u64,
}

impl GitHubSettings {
    /// The default token, if one is set and non-blank.
    pub fn token(&self) -> Option<Secret<String>> {
        self.token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty())
            .cloned()
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    /// Validate GitHub configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.api_url) {
            return Err(ValidationError::InvalidUrl("GitHub API"));
        }
        if self.min_request_interval_ms > MAX_REQUEST_INTERVAL_MS {
            return Err(ValidationError::RequestIntervalTooLarge {
                max_ms: MAX_REQUEST_INTERVAL_MS,
            });
        }
        Ok(())
    }
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            token: None,
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            min_request_interval_ms: default_min_request_interval(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    format!("profile-assistant/{}", env!("CARGO_PKG_VERSION"))
}

fn default_min_request_interval() -> u64 {
    100
}
