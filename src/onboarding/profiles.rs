//! Onboarding profile model
//!
//! One row per user, created when the onboarding form is submitted and
//! updated in place on resubmission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Onboarding profile record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    /// Owning user (one-to-one)
    pub user_id: Uuid,
    pub full_name: String,
    pub school: String,
    /// Free text ("freshman", "junior", ...)
    pub grade: String,
    pub major: String,
    /// Set on first submission; gates email generation
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating or updating a profile
#[derive(Debug, Clone)]
pub struct ProfileSubmission {
    pub full_name: String,
    pub school: String,
    pub grade: String,
    pub major: String,
}
