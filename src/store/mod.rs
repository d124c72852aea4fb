//! Storage Module
//!
//! Handlers never touch a connection pool directly: they receive a
//! `Store` through application state, injected once at startup. That keeps
//! ownership checks (`WHERE from_email = caller`) in one place and lets the
//! test suite drive the real router against an in-memory backend.
//!
//! - **`postgres`** - `PgStore`, the production backend over sqlx
//! - **`memory`** - `MemoryStore`, `RwLock`-guarded maps with the same
//!   semantics, used by tests

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::users::{NewUser, User, UserUpdate};
use crate::emails::types::{Email, EmailStatus, NewEmail};
use crate::onboarding::profiles::{Profile, ProfileSubmission};

/// Postgres-backed store
pub mod postgres;

/// In-memory store for tests
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated (duplicate email)
    #[error("duplicate value for a unique column")]
    Conflict,
    /// Anything the database reported that isn't a constraint violation
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One page of a caller's emails plus the unpaged total
#[derive(Debug, Clone)]
pub struct EmailPage {
    pub emails: Vec<Email>,
    pub total: i64,
}

/// Storage interface for users, onboarding profiles, and emails
///
/// Every email operation takes the owner's address and scopes the query to
/// it; a caller asking for another user's record gets `None`/`false`, never
/// the record.
#[async_trait]
pub trait Store: Send + Sync {
    // Users

    /// Insert a user; duplicate email is `StoreError::Conflict`
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Apply the non-`None` fields; returns `None` when the user is gone
    async fn update_user(&self, id: Uuid, update: UserUpdate)
        -> Result<Option<User>, StoreError>;

    // Onboarding profiles

    async fn profile_for_user(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError>;

    /// Create the user's profile with onboarding marked complete, or update
    /// it in place on resubmission. Atomic: there is no observable state
    /// where the user exists with a half-written profile.
    async fn upsert_profile(
        &self,
        user_id: Uuid,
        submission: ProfileSubmission,
    ) -> Result<Profile, StoreError>;

    // Emails

    async fn create_email(&self, email: NewEmail) -> Result<Email, StoreError>;

    /// The owner's emails, newest first
    async fn emails_for_owner(
        &self,
        owner: &str,
        page: i64,
        limit: i64,
    ) -> Result<EmailPage, StoreError>;

    async fn email_by_id(&self, id: Uuid, owner: &str) -> Result<Option<Email>, StoreError>;

    /// Returns `false` when the email doesn't exist or isn't the owner's.
    /// A transition to `SENT` stamps `sent_at`.
    async fn set_email_status(
        &self,
        id: Uuid,
        owner: &str,
        status: EmailStatus,
    ) -> Result<bool, StoreError>;

    /// Returns `false` when the email doesn't exist or isn't the owner's
    async fn delete_email(&self, id: Uuid, owner: &str) -> Result<bool, StoreError>;
}
