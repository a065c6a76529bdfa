//! HTTP handlers for profile endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{domain_error_response, json_rejection_response};
use crate::adapters::http::AppState;
use crate::application::handlers::GenerateProfileCommand;

use super::dto::{GenerateProfileRequest, GenerateProfileResponse};

/// POST /api/profile/generate - Fetch, analyze and generate a profile
pub async fn generate_profile(
    State(state): State<AppState>,
    body: Result<Json<GenerateProfileRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection),
    };

    let cmd = GenerateProfileCommand {
        github_username: req.github_username,
        github_token: req.github_token,
        max_repos: req.max_repos,
    };

    match state.generate_profile_handler().handle(cmd).await {
        Ok(result) => {
            let response = GenerateProfileResponse::from(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
