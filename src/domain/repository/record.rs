//! Repository and user records as fetched from the host.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Bytes of source written in one language within a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBytes {
    pub language: String,
    pub bytes: u64,
}

impl LanguageBytes {
    pub fn new(language: impl Into<String>, bytes: u64) -> Self {
        Self {
            language: language.into(),
            bytes,
        }
    }
}

/// One non-fork repository owned by the profiled user.
///
/// Forks are filtered out before a record is built, so every record here
/// represents the user's own work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    /// README text, empty when the lookup failed.
    pub readme_content: String,
    pub language: Option<String>,
    /// Per-language byte counts, largest first. Empty when the lookup failed.
    pub languages: Vec<LanguageBytes>,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub size: u64,
    pub private: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl RepositoryRecord {
    /// Primary language, treating an empty string as absent.
    pub fn primary_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }

    /// Description, treating an empty string as absent.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Last-updated time, or `None` when the host sent something unparseable.
    pub fn updated_at(&self) -> Option<Timestamp> {
        Timestamp::parse_iso8601(&self.updated_at)
    }
}

/// Public profile of the user being described.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: Option<String>,
    pub avatar_url: String,
}

impl UserRecord {
    /// Display name, treating an empty string as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Whole years since the account was created, 0 when unknown.
    pub fn years_of_experience(&self, now: &Timestamp) -> u32 {
        self.created_at
            .as_deref()
            .and_then(Timestamp::parse_iso8601)
            .map(|joined| joined.whole_years_until(now))
            .unwrap_or(0)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{repo, user};
    use super::*;

    #[test]
    fn empty_language_is_absent() {
        let mut record = repo("tool");
        record.language = Some(String::new());
        assert_eq!(record.primary_language(), None);

        record.language = Some("Rust".to_string());
        assert_eq!(record.primary_language(), Some("Rust"));
    }

    #[test]
    fn unparseable_updated_at_is_none() {
        let mut record = repo("tool");
        record.updated_at = "not a date".to_string();
        assert!(record.updated_at().is_none());
    }

    #[test]
    fn years_of_experience_floors_days() {
        let now = Timestamp::parse_iso8601("2024-06-01T00:00:00Z").unwrap();
        let joined = now.minus_days(365 * 2 + 200);
        let created = joined.as_datetime().to_rfc3339();
        let record = user(Some("Alice"), Some(&created));
        assert_eq!(record.years_of_experience(&now), 2);
    }

    #[test]
    fn years_of_experience_zero_when_unknown() {
        let now = Timestamp::now();
        assert_eq!(user(None, None).years_of_experience(&now), 0);
        assert_eq!(user(None, Some("garbage")).years_of_experience(&now), 0);
    }

    #[test]
    fn blank_display_name_is_absent() {
        assert_eq!(user(Some("  "), None).display_name(), None);
        assert_eq!(user(Some("Alice"), None).display_name(), Some("Alice"));
    }
}
