//! Declarative keyword tables used to classify repositories.
//!
//! Tables are ordered. For project types the first matching row wins, so
//! row order is the priority order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of project a repository appears to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Web Application")]
    WebApplication,
    #[serde(rename = "API/Backend")]
    ApiBackend,
    #[serde(rename = "Mobile Application")]
    MobileApplication,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Tool/Utility")]
    ToolUtility,
    #[serde(rename = "Other")]
    Other,
}

impl ProjectType {
    /// Human-readable label, as shown in generated copy.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::WebApplication => "Web Application",
            ProjectType::ApiBackend => "API/Backend",
            ProjectType::MobileApplication => "Mobile Application",
            ProjectType::DataScience => "Data Science",
            ProjectType::ToolUtility => "Tool/Utility",
            ProjectType::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A keyword group and the label it assigns.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub label: T,
}

impl<T: Copy> KeywordRule<T> {
    /// True when any keyword occurs as a substring of any haystack.
    ///
    /// Haystacks are expected to be lower-cased already.
    pub fn matches(&self, haystacks: &[&str]) -> bool {
        self.keywords
            .iter()
            .any(|keyword| haystacks.iter().any(|h| h.contains(keyword)))
    }
}

/// Returns the label of the first rule matching any haystack.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], haystacks: &[&str]) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.matches(haystacks))
        .map(|rule| rule.label)
}

/// Project-type rules in priority order. Unmatched repositories are `Other`.
pub const PROJECT_TYPE_RULES: &[KeywordRule<ProjectType>] = &[
    KeywordRule {
        keywords: &["web", "app", "website", "dashboard"],
        label: ProjectType::WebApplication,
    },
    KeywordRule {
        keywords: &["api", "backend", "server"],
        label: ProjectType::ApiBackend,
    },
    KeywordRule {
        keywords: &["mobile", "android", "ios", "react-native"],
        label: ProjectType::MobileApplication,
    },
    KeywordRule {
        keywords: &["ml", "ai", "data", "analysis", "jupyter"],
        label: ProjectType::DataScience,
    },
    KeywordRule {
        keywords: &["tool", "utility", "cli", "script"],
        label: ProjectType::ToolUtility,
    },
];

/// Technology names recognised inside repository descriptions.
pub const TECHNOLOGY_VOCABULARY: &[&str] = &[
    "react",
    "vue",
    "angular",
    "node.js",
    "express",
    "django",
    "flask",
    "python",
    "javascript",
    "typescript",
    "java",
    "c#",
    "php",
    "ruby",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "firebase",
    "heroku",
    "netlify",
];

/// Classifies a repository by its name and description.
pub fn classify_project(name: &str, description: Option<&str>) -> ProjectType {
    let name = name.to_lowercase();
    let description = description.unwrap_or_default().to_lowercase();
    first_match(PROJECT_TYPE_RULES, &[&name, &description]).unwrap_or(ProjectType::Other)
}

/// Vocabulary entries that occur in the description, in vocabulary order.
pub fn technologies_in(description: Option<&str>) -> Vec<&'static str> {
    let description = description.unwrap_or_default().to_lowercase();
    if description.is_empty() {
        return Vec::new();
    }
    TECHNOLOGY_VOCABULARY
        .iter()
        .copied()
        .filter(|tech| description.contains(tech))
        .collect()
}
