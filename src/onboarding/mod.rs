//! Onboarding Module
//!
//! The one-time profile step gating email generation.
//!
//! - **`profiles`** - the profile record, one per user
//! - **`status`** - per-request status resolution: a signed token claim as
//!   the fast path, the profile store as the slow path, failing closed
//! - **`handlers`** - the submission endpoint, which writes the profile
//!   and returns a refreshed token carrying the claim

/// Profile model
pub mod profiles;

/// Status state machine and resolution
pub mod status;

/// Submission handler
pub mod handlers;

pub use handlers::submit_profile;
pub use profiles::{Profile, ProfileSubmission};
pub use status::{resolve_status, OnboardingStatus};
