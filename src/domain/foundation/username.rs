//! Host account handle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Longest login the host issues.
pub const MAX_USERNAME_LENGTH: usize = 39;

/// A non-empty account login on the repository host.
///
/// Logins are ASCII alphanumerics and `-`, so a valid value is always safe
/// to place in a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Creates a username, trimming surrounding whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("github_username"));
        }
        if trimmed.len() > MAX_USERNAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "github_username",
                "must be at most 39 characters",
            ));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ValidationError::invalid_format(
                "github_username",
                "may only contain ASCII letters, digits and '-'",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, matching how the host treats logins.
    pub fn matches(&self, login: &str) -> bool {
        self.0.eq_ignore_ascii_case(login)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let username = Username::new("  alice ").unwrap();
        assert_eq!(username.as_str(), "alice");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn rejects_path_separators() {
        assert!(Username::new("alice/repo").is_err());
        assert!(Username::new("al ice").is_err());
    }

    #[test]
    fn rejects_url_delimiters() {
        for raw in ["alice#evil", "a?b", "a%2F", "alice.bob", "ali_ce", "ålice"] {
            assert!(
                matches!(
                    Username::new(raw),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_hyphenated_logins() {
        let username = Username::new("octo-cat-42").unwrap();
        assert_eq!(username.as_str(), "octo-cat-42");
    }

    #[test]
    fn enforces_length_limit() {
        let longest = "a".repeat(MAX_USERNAME_LENGTH);
        assert!(Username::new(longest.as_str()).is_ok());

        let too_long = "a".repeat(MAX_USERNAME_LENGTH + 1);
        assert!(matches!(
            Username::new(too_long),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn deserialize_rejects_invalid_login() {
        let result: Result<Username, _> = serde_json::from_str(r#""alice#evil""#);
        assert!(result.is_err());
    }

    #[test]
    fn matches_ignores_case() {
        let username = Username::new("Alice").unwrap();
        assert!(username.matches("alice"));
        assert!(!username.matches("bob"));
    }
}
