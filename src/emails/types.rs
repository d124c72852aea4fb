/**
 * Email Record Types
 *
 * An email belongs to the address that created it (`from_email`); every
 * store operation over emails is scoped to that owner. Delivery status is
 * data the client reports back, not something this service observes; the
 * service never talks SMTP.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Delivery status of a stored email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailStatus {
    Pending,
    Sent,
    Failed,
}

impl EmailStatus {
    /// Wire/database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Sent => "SENT",
            Self::Failed => "FAILED",
        }
    }

    /// Parse the wire representation; anything else is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "SENT" => Some(Self::Sent),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub id: Uuid,
    pub subject: String,
    pub content: String,
    /// Owning address, always the authenticated creator
    pub from_email: String,
    pub to_email: String,
    pub status: EmailStatus,
    /// Stamped when the status transitions to `SENT`
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating an email
#[derive(Debug, Clone)]
pub struct NewEmail {
    pub subject: String,
    pub content: String,
    pub from_email: String,
    pub to_email: String,
    pub status: EmailStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [EmailStatus::Pending, EmailStatus::Sent, EmailStatus::Failed] {
            assert_eq!(EmailStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_eq!(EmailStatus::parse("DONE"), None);
        assert_eq!(EmailStatus::parse("sent"), None);
        assert_eq!(EmailStatus::parse(""), None);
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let value = serde_json::to_value(EmailStatus::Pending).unwrap();
        assert_eq!(value, "PENDING");
    }
}
