//! Signout stub
//!
//! POST /api/auth/signout
//!
//! Sessions are stateless JWTs; there is nothing to revoke server-side and
//! clients sign out by discarding the token. The route exists so the API
//! surface matches the product, and answers 501.

use crate::error::ApiError;

/// Signout handler (501 stub)
pub async fn signout() -> ApiError {
    ApiError::NotImplemented
}
