//! Host API wire types.
//!
//! Only the fields the profile pipeline reads are declared; everything else
//! in the host's payloads is ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::repository::{LanguageBytes, RepositoryRecord, UserRecord};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Owner {
    pub login: String,
}

/// Entry of a repository listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Repo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub owner: Owner,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Repo {
    /// Builds the domain record from the listing entry plus enrichment.
    pub fn into_record(
        self,
        readme_content: String,
        languages: Vec<LanguageBytes>,
    ) -> RepositoryRecord {
        RepositoryRecord {
            name: self.name,
            full_name: self.full_name,
            html_url: self.html_url,
            description: self.description,
            readme_content,
            language: self.language,
            languages,
            topics: self.topics,
            stars: self.stargazers_count,
            forks: self.forks_count,
            open_issues: self.open_issues_count,
            size: self.size,
            private: self.private,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        UserRecord {
            username: user.login,
            name: user.name,
            bio: user.bio,
            location: user.location,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            created_at: user.created_at,
            avatar_url: user.avatar_url,
        }
    }
}

/// README payload; `content` is base64 with embedded line breaks.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Readme {
    pub content: String,
}

/// Language name to byte count.
pub type Languages = BTreeMap<String, u64>;

/// Orders a language map by bytes descending, ties by name.
pub fn ranked_languages(languages: Languages) -> Vec<LanguageBytes> {
    let mut ranked: Vec<LanguageBytes> = languages
        .into_iter()
        .map(|(language, bytes)| LanguageBytes::new(language, bytes))
        .collect();
    ranked.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    ranked
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RateLimitResponse {
    pub resources: RateLimitResources,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RateLimitResources {
    pub core: RateLimitBucket,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RateLimitBucket {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
