//! Request/response types for the profile endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::GenerateProfileResult;
use crate::domain::analysis::ProjectType;
use crate::domain::profile::ProfileRecord;
use crate::domain::repository::UserRecord;

/// Body of `POST /api/profile/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateProfileRequest {
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub github_token: Option<String>,
    #[serde(default)]
    pub max_repos: Option<i64>,
}

/// Successful profile generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateProfileResponse {
    pub success: bool,
    pub profile: ProfileRecord,
    pub user_info: UserRecord,
    pub analysis: AnalysisSummary,
}

/// Subset of the repository analysis echoed back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total_repos: usize,
    pub languages: BTreeMap<String, u64>,
    pub technologies: Vec<String>,
    pub project_types: Vec<ProjectType>,
}

impl From<GenerateProfileResult> for GenerateProfileResponse {
    fn from(result: GenerateProfileResult) -> Self {
        let analysis = AnalysisSummary {
            total_repos: result.total_repos(),
            languages: result.analysis.languages,
            technologies: result.analysis.technologies.into_iter().collect(),
            project_types: result.analysis.project_types,
        };
        Self {
            success: true,
            profile: result.profile,
            user_info: result.user,
            analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fields_are_optional() {
        let req: GenerateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(req.github_username.is_none());
        assert!(req.max_repos.is_none());

        let req: GenerateProfileRequest = serde_json::from_str(
            r#"{"github_username": "alice", "github_token": "ghp_x", "max_repos": 5}"#,
        )
        .unwrap();
        assert_eq!(req.github_username.as_deref(), Some("alice"));
        assert_eq!(req.github_token.as_deref(), Some("ghp_x"));
        assert_eq!(req.max_repos, Some(5));
    }

    #[test]
    fn project_types_serialize_as_labels() {
        let summary = AnalysisSummary {
            total_repos: 1,
            languages: BTreeMap::from([("Rust".to_string(), 3)]),
            technologies: vec!["docker".to_string()],
            project_types: vec![ProjectType::ApiBackend],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["project_types"][0], "API/Backend");
        assert_eq!(json["languages"]["Rust"], 3);
    }
}
