/**
 * Response Envelope
 *
 * Every route returns the same JSON shape:
 *
 * ```json
 * { "success": true, "data": { ... }, "message": "optional human note" }
 * { "success": false, "error": "what went wrong" }
 * ```
 *
 * Absent fields are omitted from the serialized body rather than emitted
 * as null, so clients can key on field presence.
 */
use serde::{Deserialize, Serialize};

/// Uniform response wrapper for all API routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Client-facing error description, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Optional human-readable note accompanying either outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Successful response carrying `data` and a message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    /// Failed response carrying an error description
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_error_fields() {
        let response = ApiResponse::success(serde_json::json!({"id": 1}));
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert!(body.get("error").is_none());
        assert!(body.get("message").is_none());
    }

    #[test]
    fn test_error_omits_data() {
        let response = ApiResponse::<()>::error("Server error");
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Server error");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn test_success_with_message() {
        let response = ApiResponse::success_with_message(1, "created");
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 1);
        assert_eq!(body["message"], "created");
    }
}
