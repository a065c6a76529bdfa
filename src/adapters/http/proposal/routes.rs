//! HTTP routes for proposal endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::generate_proposal;
use crate::adapters::http::AppState;

/// Creates the proposal router.
pub fn proposal_routes() -> Router<AppState> {
    Router::new().route("/api/proposal/generate", post(generate_proposal))
}

#[cfg(test)]
mod tests {
    use super::super::dto::GenerateProposalResponse;
    use super::*;
    use crate::adapters::github::{GitHubClient, GitHubConfig};
    use crate::domain::profile::ProfileGenerator;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let host = GitHubClient::new(GitHubConfig::new()).unwrap();
        let state = AppState::new(Arc::new(host), ProfileGenerator::without_transcription());
        proposal_routes().with_state(state)
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/proposal/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn echoes_tone_and_length() {
        let (status, body) =
            post_json(r#"{"job_description": "Need a Rust API", "tone": "casual"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let body: GenerateProposalResponse = serde_json::from_value(body).unwrap();
        assert_eq!(body.message, "Proposal generation endpoint ready");
        assert_eq!(body.tone, "casual");
        assert_eq!(body.job_description_length, 15);
    }

    #[tokio::test]
    async fn missing_description_is_400() {
        let (status, body) = post_json(r#"{"tone": "casual"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Job description is required");
    }
}
