//! Profile Assistant server binary.
//!
//! Loads configuration, installs logging, wires adapters into the HTTP
//! router and serves it.

use std::error::Error;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use profile_assistant::adapters::{
    api_router, AppState, GitHubClient, GitHubConfig, LlmTranscriptionWriter, OpenAIConfig,
    OpenAIProvider,
};
use profile_assistant::config::{AppConfig, ServerConfig};
use profile_assistant::domain::profile::ProfileGenerator;
use profile_assistant::ports::TranscriptionWriter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let github_config = GitHubConfig::new()
        .with_api_url(config.github.api_url.clone())
        .with_user_agent(config.github.user_agent.clone())
        .with_token(config.github.token())
        .with_min_request_interval(config.github.min_request_interval());
    let host = Arc::new(GitHubClient::new(github_config)?);

    let writer: Option<Arc<dyn TranscriptionWriter>> = match config.ai.openai_key() {
        Some(key) => {
            let openai_config = OpenAIConfig::from_secret(key)
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout());
            let provider = Arc::new(OpenAIProvider::new(openai_config)?);
            let writer: Arc<dyn TranscriptionWriter> =
                Arc::new(LlmTranscriptionWriter::new(provider));
            Some(writer)
        }
        None => {
            tracing::warn!(
                "OPENAI_API_KEY not set; profile generation will fail at the transcription step"
            );
            None
        }
    };

    let state = AppState::new(host, ProfileGenerator::from_optional(writer))
        .with_default_max_repos(config.profile.default_max_repos);

    let router = match config.server.request_timeout() {
        Some(timeout) => api_router(state).layer(TimeoutLayer::new(timeout)),
        None => api_router(state),
    };
    let app = router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server)),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        request_timeout_secs = ?config.server.request_timeout_secs,
        github_token_set = config.github.has_token(),
        openai_key_set = config.ai.has_openai(),
        "Profile assistant listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// `RUST_LOG` wins over the configured filter; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_level.as_str()));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
