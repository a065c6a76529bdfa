//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROFILE_ASSISTANT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use profile_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on port {}", config.server.port);
//! ```

mod ai;
mod error;
mod github;
mod profile;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use github::GitHubSettings;
pub use profile::ProfileConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// service. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// GitHub API access
    #[serde(default)]
    pub github: GitHubSettings,

    /// Text-generation provider (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Profile generation defaults
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROFILE_ASSISTANT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROFILE_ASSISTANT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PROFILE_ASSISTANT__GITHUB__TOKEN=...` -> `github.token = ...`
    /// - `PROFILE_ASSISTANT__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROFILE_ASSISTANT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.github.validate()?;
        self.ai.validate()?;
        self.profile.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PROFILE_ASSISTANT__SERVER__PORT",
        "PROFILE_ASSISTANT__SERVER__ENVIRONMENT",
        "PROFILE_ASSISTANT__SERVER__REQUEST_TIMEOUT_SECS",
        "PROFILE_ASSISTANT__GITHUB__TOKEN",
        "PROFILE_ASSISTANT__GITHUB__MIN_REQUEST_INTERVAL_MS",
        "PROFILE_ASSISTANT__AI__OPENAI_API_KEY",
        "PROFILE_ASSISTANT__AI__MODEL",
        "PROFILE_ASSISTANT__PROFILE__DEFAULT_MAX_REPOS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_yields_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.profile.default_max_repos, 10);
        assert!(!config.ai.has_openai());
        assert!(config.server.request_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROFILE_ASSISTANT__SERVER__PORT", "3000");
        env::set_var("PROFILE_ASSISTANT__SERVER__REQUEST_TIMEOUT_SECS", "900");
        env::set_var("PROFILE_ASSISTANT__GITHUB__TOKEN", "ghp_test");
        env::set_var("PROFILE_ASSISTANT__GITHUB__MIN_REQUEST_INTERVAL_MS", "250");
        env::set_var("PROFILE_ASSISTANT__AI__OPENAI_API_KEY", "sk-test");
        env::set_var("PROFILE_ASSISTANT__AI__MODEL", "gpt-4o-mini");
        env::set_var("PROFILE_ASSISTANT__PROFILE__DEFAULT_MAX_REPOS", "25");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout_secs, Some(900));
        assert_eq!(config.github.token().unwrap().expose_secret(), "ghp_test");
        assert_eq!(config.github.min_request_interval_ms, 250);
        assert_eq!(config.ai.openai_key().unwrap().expose_secret(), "sk-test");
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.profile.default_max_repos, 25);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROFILE_ASSISTANT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let mut config = AppConfig::default();
        config.profile.default_max_repos = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDefaultMaxRepos { .. })
        ));
    }
}
