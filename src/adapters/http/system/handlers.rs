//! HTTP handlers for health and quota endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::AppState;
use crate::ports::{HostCredentials, HostError};

use super::dto::{HealthResponse, RateLimitResponse};

/// GET /health - Liveness and configuration flags
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        config_loaded: true,
        github_token_set: state.host.has_default_token(),
        openai_key_set: state.generator.can_transcribe(),
    })
}

/// GET /api/github/rate-limit - Remaining host API quota for the default token
pub async fn rate_limit(State(state): State<AppState>) -> Response {
    match state
        .host
        .rate_limit_status(&HostCredentials::anonymous())
        .await
    {
        Ok(rate) => (StatusCode::OK, Json(RateLimitResponse::from(rate))).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Rate limit check failed");
            let message = match err {
                HostError::Transport(_) => err.to_string(),
                _ => "Could not check rate limit".to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(message)),
            )
                .into_response()
        }
    }
}
