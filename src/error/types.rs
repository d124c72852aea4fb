/**
 * API Error Types
 *
 * One error enum covers every failure a handler can surface:
 *
 * - Validation  - 400, first field violation as the message
 * - Conflict    - 400, duplicate unique value ("User already exists")
 * - Unauthorized - 401, generic message; the client is never told whether
 *   the token was missing, malformed, expired, or referenced a deleted user
 * - Forbidden   - 403, onboarding gate
 * - NotFound    - 404
 * - Upstream    - 500, completion API failure; cause logged, message generic
 * - Store/Internal - 500, "Server error" to the client, cause logged
 * - NotImplemented - 501 stub routes
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation
    #[error("{message}")]
    Validation { message: String },

    /// Missing, malformed, or invalid credential
    #[error("{message}")]
    Unauthorized { message: String },

    /// Authenticated but not allowed (e.g. onboarding incomplete)
    #[error("{message}")]
    Forbidden { message: String },

    /// Resource does not exist or is not owned by the caller
    #[error("{message}")]
    NotFound { message: String },

    /// Duplicate value for a unique field
    #[error("{message}")]
    Conflict { message: String },

    /// The completion API failed; `message` is what the client sees
    #[error("{message}")]
    Upstream { message: String },

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Anything else that should never reach the client verbatim
    #[error("internal error: {0}")]
    Internal(String),

    /// Placeholder route
    #[error("Not implemented")]
    NotImplemented,
}

impl ApiError {
    /// Validation error (400) with the violated rule's message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Authentication error (401) with a generic message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Authorization error (403)
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Conflict error (400)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Upstream dependency error (500) with a client-safe message
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream { .. } | Self::Store(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }

    /// The error string sent to the client
    ///
    /// Server-side failures collapse to a generic "Server error"; their
    /// real cause only ever reaches the log.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Upstream { message } => message.clone(),
            Self::Store(_) | Self::Internal(_) => "Server error".to_string(),
            Self::NotImplemented => "Not implemented".to_string(),
        }
    }
}
