//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid {0} URL: must start with http:// or https://")]
    InvalidUrl(&'static str),

    #[error("Minimum request interval must be at most {max_ms}ms")]
    RequestIntervalTooLarge { max_ms: u64 },

    #[error("Default max repos must be between 1 and {max}")]
    InvalidDefaultMaxRepos { max: usize },
}
