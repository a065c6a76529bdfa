//! GenerateProfile - Command handler for the fetch, analyze, generate pipeline.

use std::sync::Arc;

use crate::domain::analysis::{RepositoryAnalysis, RepositoryAnalyzer};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, Username, ValidationError};
use crate::domain::profile::{ProfileGenerator, ProfileRecord};
use crate::domain::repository::{RepositoryRecord, UserRecord};
use crate::ports::{HostCredentials, HostError, RepositoryHost};

/// Largest accepted `max_repos`.
pub const MAX_REPOS_LIMIT: i64 = 100;

/// Command to generate a profile for a host account.
#[derive(Debug, Clone, Default)]
pub struct GenerateProfileCommand {
    pub github_username: Option<String>,
    /// Overrides the host client's default token for this request.
    pub github_token: Option<String>,
    /// Falls back to the handler's default when absent.
    pub max_repos: Option<i64>,
}

/// Result of successful profile generation.
#[derive(Debug, Clone)]
pub struct GenerateProfileResult {
    pub profile: ProfileRecord,
    pub user: UserRecord,
    pub repositories: Vec<RepositoryRecord>,
    pub analysis: RepositoryAnalysis,
}

impl GenerateProfileResult {
    pub fn total_repos(&self) -> usize {
        self.repositories.len()
    }
}

/// Handler for profile generation.
pub struct GenerateProfileHandler {
    host: Arc<dyn RepositoryHost>,
    generator: ProfileGenerator,
    default_max_repos: usize,
}

impl GenerateProfileHandler {
    pub fn new(host: Arc<dyn RepositoryHost>, generator: ProfileGenerator) -> Self {
        Self {
            host,
            generator,
            default_max_repos: 10,
        }
    }

    pub fn with_default_max_repos(mut self, default_max_repos: usize) -> Self {
        self.default_max_repos = default_max_repos;
        self
    }

    pub async fn handle(
        &self,
        cmd: GenerateProfileCommand,
    ) -> Result<GenerateProfileResult, DomainError> {
        // 1. Validate input before touching the network
        let username = Self::validate_username(cmd.github_username)?;
        let max_repos = self.validate_max_repos(cmd.max_repos)?;
        let credentials = HostCredentials::from_optional(cmd.github_token);

        // 2. Fetch user and repositories
        let user = self
            .host
            .fetch_user_info(&username, &credentials)
            .await
            .map_err(|e| host_failure("Failed to fetch user information", e))?;

        let repositories = self
            .host
            .fetch_user_repos(&username, max_repos, &credentials)
            .await
            .map_err(|e| host_failure("Failed to fetch GitHub repositories", e))?;

        if repositories.is_empty() {
            return Err(DomainError::not_found(
                "No repositories found or unable to access repositories",
            ));
        }
        tracing::info!(
            username = %username,
            repositories = repositories.len(),
            "Repositories fetched"
        );

        // 3. Analyze and generate
        let now = Timestamp::now();
        let analysis = RepositoryAnalyzer::analyze_at(&repositories, now);
        let profile = self
            .generator
            .generate_at(&user, &repositories, &analysis, now)
            .await?;

        tracing::info!(username = %username, title = %profile.title, "Profile generated");

        Ok(GenerateProfileResult {
            profile,
            user,
            repositories,
            analysis,
        })
    }

    fn validate_username(raw: Option<String>) -> Result<Username, DomainError> {
        let raw = raw.unwrap_or_default();
        match Username::new(raw) {
            Ok(username) => Ok(username),
            Err(ValidationError::EmptyField { .. }) => Err(DomainError::validation(
                "github_username",
                "GitHub username is required",
            )),
            Err(other) => Err(other.into()),
        }
    }

    fn validate_max_repos(&self, requested: Option<i64>) -> Result<usize, DomainError> {
        let Some(requested) = requested else {
            return Ok(self.default_max_repos);
        };
        if !(1..=MAX_REPOS_LIMIT).contains(&requested) {
            return Err(
                ValidationError::out_of_range("max_repos", 1, MAX_REPOS_LIMIT, requested).into(),
            );
        }
        Ok(requested as usize)
    }
}

/// Wraps a host failure with the pipeline step that hit it.
fn host_failure(context: &str, err: HostError) -> DomainError {
    let code = match &err {
        HostError::RateLimited => ErrorCode::RateLimited,
        HostError::Transport(_) => ErrorCode::TransportError,
        HostError::Status { .. } | HostError::Decode(_) => ErrorCode::UpstreamError,
    };
    tracing::error!(error = %err, "{}", context);

    let mut domain_err = DomainError::new(code, format!("{}: {}", context, err));
    if let HostError::Status { status, .. } = &err {
        domain_err = domain_err.with_detail("upstream_status", status.to_string());
    }
    domain_err
}
