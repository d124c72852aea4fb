//! Common test utilities
//!
//! Builds a `TestServer` over the real router with the in-memory store and
//! a stub completion client, plus helpers for registering users and
//! extracting tokens.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use uuid::Uuid;

use email_microwave::generation::client::{CompletionClient, GenerationError};
use email_microwave::routes::router::create_router;
use email_microwave::server::config::{AuthConfig, Config, GenerationConfig};
use email_microwave::server::state::AppState;
use email_microwave::store::{MemoryStore, Store};

/// Configuration for tests; the database URL is never dialed
pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        server_port: 0,
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_expiry_days: 7,
        },
        generation: GenerationConfig {
            api_key: "test-key".to_string(),
            base_url: "http://completion.invalid".to_string(),
            model: "gpt-3.5-turbo".to_string(),
        },
    }
}

/// Stub completion client with a canned outcome
pub enum StubGenerator {
    Reply(String),
    Fail,
}

impl StubGenerator {
    /// A stub that answers with well-formed JSON
    pub fn json_reply() -> Self {
        Self::Reply(r#"{"subject":"Quick question","content":"Hi there,\n\nWould you have ten minutes this week?"}"#.to_string())
    }
}

#[async_trait]
impl CompletionClient for StubGenerator {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, GenerationError> {
        match self {
            Self::Reply(text) => Ok(text.clone()),
            Self::Fail => Err(GenerationError::Empty),
        }
    }
}

/// Build a test server over explicit store and generator
pub fn create_test_server_with(
    store: Arc<dyn Store>,
    generator: Arc<dyn CompletionClient>,
) -> TestServer {
    let state = AppState::new(store, generator, test_config());
    TestServer::new(create_router(state)).unwrap()
}

/// Build a test server with a fresh in-memory store
pub fn create_test_server() -> TestServer {
    create_test_server_with(
        Arc::new(MemoryStore::new()),
        Arc::new(StubGenerator::json_reply()),
    )
}

/// Register a user and return the response body's `data` object
pub async fn register(
    server: &TestServer,
    email: &str,
    password: &str,
    name: &str,
) -> serde_json::Value {
    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "email": email,
            "password": password,
            "name": name,
        }))
        .await;
    let body: serde_json::Value = response.json();
    body["data"].clone()
}

/// Register a user and return just the session token
pub async fn register_token(
    server: &TestServer,
    email: &str,
    password: &str,
    name: &str,
) -> String {
    register(server, email, password, name).await["token"]
        .as_str()
        .expect("registration should return a token")
        .to_string()
}

/// Complete onboarding for a token and return the refreshed token
pub async fn complete_onboarding(server: &TestServer, token: &str) -> String {
    let response = server
        .post("/api/user-profile")
        .authorization_bearer(token)
        .json(&serde_json::json!({
            "full_name": "Ann Example",
            "school": "State University",
            "grade": "junior",
            "major": "Computer Science",
        }))
        .await;
    let body: serde_json::Value = response.json();
    body["data"]["token"]
        .as_str()
        .expect("onboarding should return a refreshed token")
        .to_string()
}

/// A store wrapper whose email writes always fail, for exercising the
/// best-effort save path
pub struct FailingEmailWrites {
    inner: MemoryStore,
}

impl FailingEmailWrites {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
        }
    }
}

#[async_trait]
impl Store for FailingEmailWrites {
    async fn create_user(
        &self,
        user: email_microwave::auth::users::NewUser,
    ) -> Result<email_microwave::auth::users::User, email_microwave::store::StoreError> {
        self.inner.create_user(user).await
    }

    async fn user_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<email_microwave::auth::users::User>, email_microwave::store::StoreError>
    {
        self.inner.user_by_id(id).await
    }

    async fn user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<email_microwave::auth::users::User>, email_microwave::store::StoreError>
    {
        self.inner.user_by_email(email).await
    }

    async fn update_user(
        &self,
        id: Uuid,
        update: email_microwave::auth::users::UserUpdate,
    ) -> Result<Option<email_microwave::auth::users::User>, email_microwave::store::StoreError>
    {
        self.inner.update_user(id, update).await
    }

    async fn profile_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<
        Option<email_microwave::onboarding::profiles::Profile>,
        email_microwave::store::StoreError,
    > {
        self.inner.profile_for_user(user_id).await
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        submission: email_microwave::onboarding::profiles::ProfileSubmission,
    ) -> Result<
        email_microwave::onboarding::profiles::Profile,
        email_microwave::store::StoreError,
    > {
        self.inner.upsert_profile(user_id, submission).await
    }

    async fn create_email(
        &self,
        _email: email_microwave::emails::types::NewEmail,
    ) -> Result<email_microwave::emails::types::Email, email_microwave::store::StoreError> {
        Err(email_microwave::store::StoreError::Database(
            sqlx::Error::PoolClosed,
        ))
    }

    async fn emails_for_owner(
        &self,
        owner: &str,
        page: i64,
        limit: i64,
    ) -> Result<email_microwave::store::EmailPage, email_microwave::store::StoreError> {
        self.inner.emails_for_owner(owner, page, limit).await
    }

    async fn email_by_id(
        &self,
        id: Uuid,
        owner: &str,
    ) -> Result<Option<email_microwave::emails::types::Email>, email_microwave::store::StoreError>
    {
        self.inner.email_by_id(id, owner).await
    }

    async fn set_email_status(
        &self,
        id: Uuid,
        owner: &str,
        status: email_microwave::emails::types::EmailStatus,
    ) -> Result<bool, email_microwave::store::StoreError> {
        self.inner.set_email_status(id, owner, status).await
    }

    async fn delete_email(
        &self,
        id: Uuid,
        owner: &str,
    ) -> Result<bool, email_microwave::store::StoreError> {
        self.inner.delete_email(id, owner).await
    }
}
