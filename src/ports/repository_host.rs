//! Repository Host Port - Interface to the code-hosting REST API.
//!
//! The host supplies the raw material for profile generation: the user's
//! public profile and their non-fork repositories, each enriched with README
//! text and a per-language byte breakdown.
//!
//! # Error Policy
//!
//! - Listing and user lookups propagate failures as [`HostError`]
//! - README and language lookups are best-effort and never fail a fetch
//! - An empty repository list is a valid result, not an error

use async_trait::async_trait;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Username;
use crate::domain::repository::{RepositoryRecord, UserRecord};

/// Port for repository-host interactions.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetches the public profile of `username`.
    async fn fetch_user_info(
        &self,
        username: &Username,
        credentials: &HostCredentials,
    ) -> Result<UserRecord, HostError>;

    /// Lists up to `max_count` non-fork repositories owned by `username`,
    /// enriched with README content and language bytes.
    async fn fetch_user_repos(
        &self,
        username: &Username,
        max_count: usize,
        credentials: &HostCredentials,
    ) -> Result<Vec<RepositoryRecord>, HostError>;

    /// Reports the caller's remaining request quota.
    async fn rate_limit_status(
        &self,
        credentials: &HostCredentials,
    ) -> Result<HostRateLimit, HostError>;

    /// Whether a default access token is configured on this host client.
    fn has_default_token(&self) -> bool;
}

/// Credentials supplied with a single request.
///
/// An empty credential set means "use whatever the host client was
/// configured with", which may itself be anonymous.
#[derive(Debug, Clone, Default)]
pub struct HostCredentials {
    token: Option<Secret<String>>,
}

impl HostCredentials {
    /// No request-specific token.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Uses `token` for this request. Blank tokens count as absent.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            return Self::anonymous();
        }
        Self {
            token: Some(Secret::new(token)),
        }
    }

    /// Builds credentials from an optional request field.
    pub fn from_optional(token: Option<String>) -> Self {
        token.map(Self::with_token).unwrap_or_default()
    }

    pub fn token(&self) -> Option<&Secret<String>> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// This credential set if it carries a token, otherwise `fallback`.
    pub fn or(&self, fallback: Option<&Secret<String>>) -> Option<Secret<String>> {
        self.token.as_ref().or(fallback).cloned()
    }
}

/// Core request quota reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRateLimit {
    pub limit: u64,
    pub remaining: u64,
    /// Unix seconds at which the quota resets.
    pub reset_time: u64,
    pub authenticated: bool,
}

/// Repository host errors.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Host refused the request because the quota is exhausted.
    #[error("GitHub API rate limit exceeded. Please add a GitHub token or wait an hour.")]
    RateLimited,

    /// Network-level failure before a response arrived.
    #[error("Network error: {0}")]
    Transport(String),

    /// Host answered with a non-success status.
    #[error("{status} {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Success response that could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl HostError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn blank_token_is_anonymous() {
        assert!(!HostCredentials::with_token("  ").is_authenticated());
        assert!(!HostCredentials::from_optional(None).is_authenticated());
        assert!(HostCredentials::from_optional(Some("ghp_x".to_string())).is_authenticated());
    }

    #[test]
    fn request_token_wins_over_fallback() {
        let fallback = Secret::new("default".to_string());
        let creds = HostCredentials::with_token("request");
        let chosen = creds.or(Some(&fallback)).unwrap();
        assert_eq!(chosen.expose_secret(), "request");

        let chosen = HostCredentials::anonymous().or(Some(&fallback)).unwrap();
        assert_eq!(chosen.expose_secret(), "default");

        assert!(HostCredentials::anonymous().or(None).is_none());
    }

    #[test]
    fn rate_limited_message_is_actionable() {
        assert_eq!(
            HostError::RateLimited.to_string(),
            "GitHub API rate limit exceeded. Please add a GitHub token or wait an hour."
        );
    }

    #[test]
    fn status_error_shows_code_and_body() {
        assert_eq!(HostError::status(404, "Not Found").to_string(), "404 Not Found");
    }
}
