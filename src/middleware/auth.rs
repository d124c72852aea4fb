/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in user. The middleware:
 *
 * 1. Extracts the token from the `Authorization: Bearer <token>` header
 * 2. Verifies signature and expiry
 * 3. Re-reads the user row; a token whose user was deleted is rejected
 * 4. Attaches the authenticated identity to request extensions
 *
 * Every failure mode returns the same 401; the client is never told which
 * check failed. The specific reason is logged at `warn`.
 */
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data attached to the request
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    /// Current email from the store, not the one baked into the token
    pub email: String,
    pub name: String,
    /// The token's onboarding claim; a fast-path hint, never the only truth
    pub onboarding_claim: bool,
}

fn unauthorized() -> ApiError {
    ApiError::unauthorized("Not authorized")
}

/// Authentication middleware for protected routes
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            unauthorized()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        unauthorized()
    })?;

    let claims = verify_token(&state.config.auth, token).map_err(|e| {
        tracing::warn!("token verification failed: {e}");
        unauthorized()
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("invalid user ID in token: {e}");
        unauthorized()
    })?;

    // The token is stateless; the user record is not. Re-read it so a
    // deleted account stops authenticating immediately.
    let user = state
        .store
        .user_by_id(user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("token for unknown user {user_id}");
            unauthorized()
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
        name: user.name,
        onboarding_claim: claims.onboarding,
    });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated user set by `auth_middleware`
///
/// Handlers behind the middleware take `AuthUser(user)` as a parameter;
/// on a route that skipped the middleware this rejects with 401 rather
/// than panicking.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                unauthorized()
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extractor_reads_extensions() {
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test".to_string(),
            onboarding_claim: false,
        };

        let mut request = Request::builder().uri("/").body(()).unwrap();
        request.extensions_mut().insert(user.clone());
        let (mut parts, _) = request.into_parts();

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted.user_id, user.user_id);
        assert_eq!(extracted.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_extractor_rejects_when_missing() {
        let request = Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }
}
