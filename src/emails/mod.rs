//! Emails Module
//!
//! Stored email records and their CRUD surface. Ownership is by the
//! creator's address and enforced in every store query.

/// Email record types
pub mod types;

/// CRUD handlers
pub mod handlers;

pub use handlers::{create_email, delete_email, get_email, list_emails, update_email_status};
pub use types::{Email, EmailStatus, NewEmail};
