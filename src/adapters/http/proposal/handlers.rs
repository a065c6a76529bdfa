//! HTTP handlers for proposal endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{domain_error_response, json_rejection_response};
use crate::adapters::http::AppState;
use crate::application::handlers::GenerateProposalCommand;

use super::dto::{GenerateProposalRequest, GenerateProposalResponse};

/// POST /api/proposal/generate - Validate a proposal request
pub async fn generate_proposal(
    State(state): State<AppState>,
    body: Result<Json<GenerateProposalRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection),
    };

    let cmd = GenerateProposalCommand {
        job_description: req.job_description,
        tone: req.tone,
    };

    match state.generate_proposal_handler().handle(cmd) {
        Ok(result) => {
            let response = GenerateProposalResponse::from(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
