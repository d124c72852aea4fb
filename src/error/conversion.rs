/**
 * Error Conversion
 *
 * Converts `ApiError` into an HTTP response carrying the standard envelope,
 * and pulls in the library error types handlers propagate with `?`.
 *
 * Server-side failures (5xx) are logged here with their real cause; the
 * response body only carries the generic client message.
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::envelope::ApiResponse;
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        let body = ApiResponse::<()>::error(self.client_message());
        (status, Json(body)).into_response()
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("password hashing failed: {err}"))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(format!("token signing failed: {err}"))
    }
}
