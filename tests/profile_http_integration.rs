//! Integration tests for the profile HTTP pipeline.
//!
//! These tests drive the full router against a mocked GitHub API:
//! 1. Request JSON reaches the application handler
//! 2. The GitHub client fetches and enriches repositories
//! 3. Analysis and generation produce the response body
//! 4. Failures surface with the right status and message

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use mockito::{Matcher, ServerGuard};
use serde_json::{json, Value};
use tower::ServiceExt;

use profile_assistant::adapters::ai::MockError;
use profile_assistant::adapters::{
    api_router, AppState, GitHubClient, GitHubConfig, LlmTranscriptionWriter, MockAIProvider,
    OpenAIConfig, OpenAIProvider,
};
use profile_assistant::domain::profile::ProfileGenerator;
use profile_assistant::ports::TranscriptionWriter;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn github_client(server: &ServerGuard) -> Arc<GitHubClient> {
    let config = GitHubConfig::new()
        .with_api_url(server.url())
        .with_min_request_interval(Duration::ZERO);
    Arc::new(GitHubClient::new(config).unwrap())
}

fn app_with_writer(server: &ServerGuard, writer: Option<Arc<dyn TranscriptionWriter>>) -> Router {
    let state = AppState::new(github_client(server), ProfileGenerator::from_optional(writer));
    api_router(state)
}

fn app_with_mock_ai(server: &ServerGuard, provider: MockAIProvider) -> Router {
    let writer: Arc<dyn TranscriptionWriter> =
        Arc::new(LlmTranscriptionWriter::new(Arc::new(provider)));
    app_with_writer(server, Some(writer))
}

async fn mock_alice(server: &mut ServerGuard) {
    server
        .mock("GET", "/users/alice")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "login": "alice",
                "name": "Alice Doe",
                "bio": "Builder",
                "location": "Lisbon",
                "public_repos": 4,
                "followers": 10,
                "following": 2,
                "created_at": "2019-01-01T00:00:00Z",
                "avatar_url": "https://avatars.example.com/alice"
            })
            .to_string(),
        )
        .create_async()
        .await;
}

async fn mock_dashboard_repo(server: &mut ServerGuard) {
    server
        .mock("GET", "/users/alice/repos?sort=updated&per_page=3&type=owner")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "name": "alice-web-dashboard",
                "full_name": "alice/alice-web-dashboard",
                "html_url": "https://github.com/alice/alice-web-dashboard",
                "owner": {"login": "alice"},
                "description": "Dashboard built with react",
                "language": "Python",
                "topics": ["Flask"],
                "stargazers_count": 7,
                "forks_count": 2,
                "open_issues_count": 1,
                "size": 300,
                "private": false,
                "fork": false,
                "created_at": "2021-01-01T00:00:00Z",
                "updated_at": "2024-05-01T00:00:00Z"
            }])
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/repos/alice/alice-web-dashboard/readme")
        .with_status(200)
        .with_body(json!({"content": "IyBEYXNo\nYm9hcmQ=\n", "encoding": "base64"}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/repos/alice/alice-web-dashboard/languages")
        .with_status(200)
        .with_body(json!({"JavaScript": 1200, "Python": 5000}).to_string())
        .create_async()
        .await;
}

async fn post_profile(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/profile/generate")
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

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn generates_profile_from_mocked_github() {
    let mut server = mockito::Server::new_async().await;
    mock_alice(&mut server).await;
    mock_dashboard_repo(&mut server).await;
    let provider =
        MockAIProvider::new().with_response("  Hi, I'm Alice, a full stack developer.  ");

    let (status, body) = post_profile(
        app_with_mock_ai(&server, provider.clone()),
        json!({"github_username": "alice", "max_repos": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["success"], true);

    let profile = &body["profile"];
    assert_eq!(profile["title"], "Full Stack Developer | Python | JavaScript");
    assert!(profile["overview"]
        .as_str()
        .unwrap()
        .starts_with("I'm Alice Doe, a passionate software developer"));
    assert!(profile["portfolio_projects"]
        .as_str()
        .unwrap()
        .starts_with("**Project 1:** alice-web-dashboard - Dashboard built with react"));
    assert!(profile["transcription"]
        .as_str()
        .unwrap()
        .starts_with("Hi, I'm Alice, a full stack developer.\n\n💡 Speaking Tips:"));

    assert_eq!(body["user_info"]["username"], "alice");
    assert_eq!(body["analysis"]["total_repos"], 1);
    assert_eq!(body["analysis"]["languages"]["Python"], 5001);
    assert_eq!(body["analysis"]["languages"]["JavaScript"], 1200);
    assert_eq!(body["analysis"]["project_types"], json!(["Web Application"]));
    let technologies = body["analysis"]["technologies"].as_array().unwrap();
    assert!(technologies.contains(&json!("flask")));
    assert!(technologies.contains(&json!("react")));

    assert_eq!(provider.call_count(), 1);
    let prompt = &provider.get_calls()[0].messages[0].content;
    assert!(prompt.contains("GitHub Username: alice"));
    assert!(prompt.contains("Notable Projects: alice-web-dashboard"));
}

#[tokio::test]
async fn request_token_is_sent_to_github() {
    let mut server = mockito::Server::new_async().await;
    let user = server
        .mock("GET", "/users/alice")
        .match_header("authorization", "Bearer ghp_request")
        .with_status(200)
        .with_body(
            json!({
                "login": "alice",
                "name": null,
                "bio": null,
                "location": null,
                "created_at": null
            })
            .to_string(),
        )
        .create_async()
        .await;
    let listing = server
        .mock("GET", "/user/repos?sort=updated&per_page=2&type=owner")
        .match_header("authorization", "Bearer ghp_request")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let (status, body) = post_profile(
        app_with_mock_ai(&server, MockAIProvider::new()),
        json!({"github_username": "alice", "github_token": "ghp_request", "max_repos": 1}),
    )
    .await;

    user.assert_async().await;
    listing.assert_async().await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "No repositories found or unable to access repositories"
    );
}

#[tokio::test]
async fn github_rate_limit_surfaces_as_500() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/alice")
        .with_status(403)
        .with_body(r#"{"message": "API rate limit exceeded for 1.2.3.4."}"#)
        .create_async()
        .await;
    let listing = server
        .mock("GET", Matcher::Regex("^/users/alice/repos".to_string()))
        .expect(0)
        .create_async()
        .await;

    let (status, body) = post_profile(
        app_with_mock_ai(&server, MockAIProvider::new()),
        json!({"github_username": "alice"}),
    )
    .await;

    listing.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "RATE_LIMITED");
    assert_eq!(
        body["message"],
        "Failed to fetch user information: GitHub API rate limit exceeded. \
         Please add a GitHub token or wait an hour."
    );
}

#[tokio::test]
async fn missing_openai_key_fails_generation() {
    let mut server = mockito::Server::new_async().await;
    mock_alice(&mut server).await;
    mock_dashboard_repo(&mut server).await;

    let (status, body) = post_profile(
        app_with_writer(&server, None),
        json!({"github_username": "alice", "max_repos": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "GENERATION_UNAVAILABLE");
    assert_eq!(
        body["message"],
        "OpenAI client not available. Please set OPENAI_API_KEY environment variable."
    );
}

#[tokio::test]
async fn provider_failure_fails_generation() {
    let mut server = mockito::Server::new_async().await;
    mock_alice(&mut server).await;
    mock_dashboard_repo(&mut server).await;
    let provider = MockAIProvider::new().with_error(MockError::Network {
        message: "connection reset".to_string(),
    });

    let (status, body) = post_profile(
        app_with_mock_ai(&server, provider),
        json!({"github_username": "alice", "max_repos": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "AI_PROVIDER_ERROR");
    assert_eq!(
        body["message"],
        "Failed to generate AI transcription: network error: connection reset"
    );
}

#[tokio::test]
async fn openai_provider_is_called_with_profile_prompt() {
    let mut github = mockito::Server::new_async().await;
    mock_alice(&mut github).await;
    mock_dashboard_repo(&mut github).await;

    let mut openai = mockito::Server::new_async().await;
    let completion = openai
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 300
        })))
        .with_status(200)
        .with_body(
            json!({
                "model": "gpt-3.5-turbo",
                "choices": [{"message": {"role": "assistant", "content": "Hello from OpenAI"}, "finish_reason": "stop"}],
                "usage": {"prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider =
        OpenAIProvider::new(OpenAIConfig::new("sk-test").with_base_url(openai.url())).unwrap();
    let writer: Arc<dyn TranscriptionWriter> =
        Arc::new(LlmTranscriptionWriter::new(Arc::new(provider)));

    let (status, body) = post_profile(
        app_with_writer(&github, Some(writer)),
        json!({"github_username": "alice", "max_repos": 3}),
    )
    .await;

    completion.assert_async().await;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert!(body["profile"]["transcription"]
        .as_str()
        .unwrap()
        .starts_with("Hello from OpenAI\n\n"));
}
