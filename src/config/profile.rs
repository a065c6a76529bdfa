//! Profile generation defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::handlers::profile::MAX_REPOS_LIMIT;

/// Profile generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// Repositories analyzed when a request names no `max_repos`
    #[serde(default = "default_max_repos")]
    pub default_max_repos: usize,
}

impl ProfileConfig {
    /// Validate profile configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let max = MAX_REPOS_LIMIT as usize;
        if self.default_max_repos == 0 || self.default_max_repos > max {
            return Err(ValidationError::InvalidDefaultMaxRepos { max });
        }
        Ok(())
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default_max_repos: default_max_repos(),
        }
    }
}

fn default_max_repos() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_repos() {
        let config = ProfileConfig::default();
        assert_eq!(config.default_max_repos, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_default_is_rejected() {
        assert!(ProfileConfig { default_max_repos: 0 }.validate().is_err());
        assert!(ProfileConfig { default_max_repos: 101 }.validate().is_err());
    }
}
