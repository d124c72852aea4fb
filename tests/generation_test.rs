//! Email generation integration tests
//!
//! The generation endpoint end-to-end: parsing, fallback shaping,
//! best-effort persistence, and upstream failure.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::{
    complete_onboarding, create_test_server_with, register_token, FailingEmailWrites,
    StubGenerator,
};
use email_microwave::store::MemoryStore;

fn generation_body() -> serde_json::Value {
    serde_json::json!({
        "recipient_name": "Jane",
        "recipient_organization": "Acme Corp",
        "desired_outcome": "schedule a call",
        "tone": "formal",
    })
}

#[tokio::test]
async fn test_generation_parses_json_completion() {
    let server = create_test_server_with(
        Arc::new(MemoryStore::new()),
        Arc::new(StubGenerator::json_reply()),
    );
    let token = register_token(&server, "a@x.com", "secret1", "Ann").await;
    let token = complete_onboarding(&server, &token).await;

    let response = server
        .post("/api/generate-email")
        .authorization_bearer(&token)
        .json(&generation_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["subject"], "Quick question");
    assert!(body["data"]["content"]
        .as_str()
        .unwrap()
        .starts_with("Hi there"));
    // No partial-save note on the happy path.
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_generated_email_is_persisted() {
    let server = create_test_server_with(
        Arc::new(MemoryStore::new()),
        Arc::new(StubGenerator::json_reply()),
    );
    let token = register_token(&server, "a@x.com", "secret1", "Ann").await;
    let token = complete_onboarding(&server, &token).await;

    server
        .post("/api/generate-email")
        .authorization_bearer(&token)
        .json(&generation_body())
        .await;

    let response = server
        .get("/api/emails")
        .authorization_bearer(&token)
        .await;
    let body: serde_json::Value = response.json();
    let emails = body["data"]["emails"].as_array().unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0]["subject"], "Quick question");
    assert_eq!(emails[0]["status"], "PENDING");
    assert_eq!(emails[0]["from_email"], "a@x.com");
    // Address synthesized from recipient and organization.
    assert_eq!(emails[0]["to_email"], "Jane@acmecorp.com");
}

#[tokio::test]
async fn test_plain_text_completion_falls_back() {
    let server = create_test_server_with(
        Arc::new(MemoryStore::new()),
        Arc::new(StubGenerator::Reply(
            "Subject: hello\n\nHi Jane, wanted to reach out.".to_string(),
        )),
    );
    let token = register_token(&server, "a@x.com", "secret1", "Ann").await;
    let token = complete_onboarding(&server, &token).await;

    let response = server
        .post("/api/generate-email")
        .authorization_bearer(&token)
        .json(&generation_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["subject"], "Professional Communication");
    assert!(body["data"]["content"]
        .as_str()
        .unwrap()
        .contains("wanted to reach out"));
}

#[tokio::test]
async fn test_upstream_failure_is_generic_500() {
    let server = create_test_server_with(
        Arc::new(MemoryStore::new()),
        Arc::new(StubGenerator::Fail),
    );
    let token = register_token(&server, "a@x.com", "secret1", "Ann").await;
    let token = complete_onboarding(&server, &token).await;

    let response = server
        .post("/api/generate-email")
        .authorization_bearer(&token)
        .json(&generation_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to generate email");
}

#[tokio::test]
async fn test_save_failure_reports_partial_success() {
    let server = create_test_server_with(
        Arc::new(FailingEmailWrites::new()),
        Arc::new(StubGenerator::json_reply()),
    );
    let token = register_token(&server, "a@x.com", "secret1", "Ann").await;
    let token = complete_onboarding(&server, &token).await;

    let response = server
        .post("/api/generate-email")
        .authorization_bearer(&token)
        .json(&generation_body())
        .await;

    // The generation itself succeeded; only the save failed.
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["subject"], "Quick question");
    assert_eq!(body["message"], "Email generated but could not be saved");
}

#[tokio::test]
async fn test_generation_validates_fields() {
    let server = create_test_server_with(
        Arc::new(MemoryStore::new()),
        Arc::new(StubGenerator::json_reply()),
    );
    let token = register_token(&server, "a@x.com", "secret1", "Ann").await;
    let token = complete_onboarding(&server, &token).await;

    let response = server
        .post("/api/generate-email")
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "recipient_name": "",
            "recipient_organization": "Acme Corp",
            "desired_outcome": "schedule a call",
            "tone": "warm",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn test_generation_rejects_unknown_tone() {
    let server = create_test_server_with(
        Arc::new(MemoryStore::new()),
        Arc::new(StubGenerator::json_reply()),
    );
    let token = register_token(&server, "a@x.com", "secret1", "Ann").await;
    let token = complete_onboarding(&server, &token).await;

    let response = server
        .post("/api/generate-email")
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "recipient_name": "Jane",
            "recipient_organization": "Acme Corp",
            "desired_outcome": "schedule a call",
            "tone": "angry",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
