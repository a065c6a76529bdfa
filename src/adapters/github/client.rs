//! GitHub REST client implementing the RepositoryHost port.
//!
//! Every outbound call goes through [`RequestPacer`], so all fetches sharing
//! one client are spaced at least `min_request_interval` apart.

use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::foundation::Username;
use crate::domain::repository::{LanguageBytes, RepositoryRecord, UserRecord};
use crate::ports::{HostCredentials, HostError, HostRateLimit, RepositoryHost};

use super::pacer::RequestPacer;
use super::types::{ranked_languages, Languages, RateLimitResponse, Readme, Repo, User};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Repositories requested per wanted repository when listing with a token.
///
/// The authenticated listing also returns repositories of the token's own
/// identity, which are filtered out afterwards. The factor is a heuristic
/// buffer with no guarantee of yielding `max_count` matches.
const AUTHENTICATED_OVERFETCH: usize = 2;

/// Configuration for the GitHub client.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_url: String,
    pub user_agent: String,
    /// Used when a request carries no token of its own.
    token: Option<Secret<String>>,
    pub min_request_interval: Duration,
}

impl GitHubConfig {
    pub fn new() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            user_agent: concat!("profile-assistant/", env!("CARGO_PKG_VERSION")).to_string(),
            token: None,
            min_request_interval: Duration::from_millis(100),
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the default token. Blank tokens are ignored.
    pub fn with_token(mut self, token: Option<Secret<String>>) -> Self {
        self.token = token.filter(|t| !t.expose_secret().trim().is_empty());
        self
    }

    pub fn with_min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// GitHub API client.
pub struct GitHubClient {
    config: GitHubConfig,
    client: Client,
    pacer: RequestPacer,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self, HostError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| HostError::transport(format!("Failed to create HTTP client: {}", e)))?;

        let pacer = RequestPacer::new(config.min_request_interval);
        Ok(Self {
            config,
            client,
            pacer,
        })
    }

    /// Sends a paced GET. Only transport failures and rate limiting are
    /// errors here; callers decide what other statuses mean.
    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&Secret<String>>,
    ) -> Result<Response, HostError> {
        self.pacer.wait().await;

        let url = format!("{}{}", self.config.api_url, path);
        tracing::debug!(%url, authenticated = token.is_some(), "GitHub API request");

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| HostError::transport(e.to_string()))?;

        if response.status().as_u16() == 403 {
            let body = response.text().await.unwrap_or_default();
            if body.to_lowercase().contains("rate limit") {
                tracing::warn!(%url, "GitHub API rate limit exceeded");
                return Err(HostError::RateLimited);
            }
            return Err(HostError::status(403, body));
        }

        Ok(response)
    }

    /// GET that must succeed and decode as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&Secret<String>>,
    ) -> Result<T, HostError> {
        let response = self.get(path, query, token).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HostError::status(status.as_u16(), body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| HostError::decode(e.to_string()))
    }

    fn effective_token(&self, credentials: &HostCredentials) -> Option<Secret<String>> {
        credentials.or(self.config.token.as_ref())
    }

    /// README text, empty on any failure.
    async fn readme(&self, owner: &str, repo: &str, token: Option<&Secret<String>>) -> String {
        let path = format!("/repos/{}/{}/readme", owner, repo);
        match self.get_json::<Readme>(&path, &[], token).await {
            Ok(readme) => decode_readme(&readme.content).unwrap_or_else(|| {
                tracing::warn!(owner, repo, "README content is not valid base64 UTF-8");
                String::new()
            }),
            Err(e) => {
                tracing::warn!(owner, repo, error = %e, "README lookup failed");
                String::new()
            }
        }
    }

    /// Language byte counts, empty on any failure.
    async fn languages(
        &self,
        owner: &str,
        repo: &str,
        token: Option<&Secret<String>>,
    ) -> Vec<LanguageBytes> {
        let path = format!("/repos/{}/{}/languages", owner, repo);
        match self.get_json::<Languages>(&path, &[], token).await {
            Ok(languages) => ranked_languages(languages),
            Err(e) => {
                tracing::warn!(owner, repo, error = %e, "Language lookup failed");
                Vec::new()
            }
        }
    }

    async fn enrich(&self, repo: Repo, token: Option<&Secret<String>>) -> RepositoryRecord {
        let owner = repo.owner.login.clone();
        let readme = self.readme(&owner, &repo.name, token).await;
        let languages = self.languages(&owner, &repo.name, token).await;
        repo.into_record(readme, languages)
    }
}

/// Decodes base64 README content, ignoring embedded whitespace.
fn decode_readme(content: &str) -> Option<String> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact)
        .ok()?;
    String::from_utf8(bytes).ok()
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    #[tracing::instrument(skip_all, fields(username = %username))]
    async fn fetch_user_info(
        &self,
        username: &Username,
        credentials: &HostCredentials,
    ) -> Result<UserRecord, HostError> {
        let token = self.effective_token(credentials);
        let path = format!("/users/{}", username);
        let user: User = self.get_json(&path, &[], token.as_ref()).await?;
        Ok(user.into())
    }

    #[tracing::instrument(skip_all, fields(username = %username))]
    async fn fetch_user_repos(
        &self,
        username: &Username,
        max_count: usize,
        credentials: &HostCredentials,
    ) -> Result<Vec<RepositoryRecord>, HostError> {
        if max_count == 0 {
            return Ok(Vec::new());
        }

        let token = self.effective_token(credentials);
        let authenticated = token.is_some();

        let (path, per_page) = if authenticated {
            ("/user/repos".to_string(), max_count * AUTHENTICATED_OVERFETCH)
        } else {
            (format!("/users/{}/repos", username), max_count)
        };
        let query = [
            ("sort", "updated".to_string()),
            ("per_page", per_page.to_string()),
            ("type", "owner".to_string()),
        ];

        let listing: Vec<Repo> = self.get_json(&path, &query, token.as_ref()).await?;
        let listed = listing.len();

        let mut records = Vec::new();
        for repo in listing {
            if authenticated && !username.matches(&repo.owner.login) {
                continue;
            }
            if repo.fork {
                continue;
            }
            records.push(self.enrich(repo, token.as_ref()).await);
            if records.len() >= max_count {
                break;
            }
        }

        tracing::debug!(listed, kept = records.len(), "Repository listing filtered");
        Ok(records)
    }

    async fn rate_limit_status(
        &self,
        credentials: &HostCredentials,
    ) -> Result<HostRateLimit, HostError> {
        let token = self.effective_token(credentials);
        let response: RateLimitResponse = self.get_json("/rate_limit", &[], token.as_ref()).await?;
        let core = response.resources.core;
        Ok(HostRateLimit {
            limit: core.limit,
            remaining: core.remaining,
            reset_time: core.reset,
            authenticated: token.is_some(),
        })
    }

    fn has_default_token(&self) -> bool {
        self.config.token.is_some()
    }
}
