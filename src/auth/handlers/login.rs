/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Verifies email and password and returns a session token. Unknown email
 * and wrong password both return 401 "Invalid credentials", so accounts
 * can't be enumerated. Password comparison delegates to bcrypt's
 * constant-time verify.
 *
 * The issued token embeds the user's current onboarding state, so a user
 * who already completed onboarding takes the fast path on their next
 * gated request.
 */
use axum::{extract::State, response::Json};

use crate::api::{ApiResponse, ValidatedJson};
use crate::auth::handlers::types::{AuthData, LoginRequest};
use crate::auth::sessions::issue_token;
use crate::error::ApiError;
use crate::onboarding::status::onboarding_completed;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password, same message
/// * `500 Internal Server Error` - storage or token signing failed
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, ApiError> {
    let user = state
        .store
        .user_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login for unknown email: {}", request.email);
            ApiError::unauthorized("Invalid credentials")
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("invalid password for: {}", user.email);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let onboarding = onboarding_completed(state.store.as_ref(), user.id).await;
    let token = issue_token(&state.config.auth, user.id, &user.email, onboarding)?;

    tracing::info!("user logged in: {}", user.email);

    Ok(Json(ApiResponse::success_with_message(
        AuthData {
            user: user.public(),
            token,
        },
        "Login successful",
    )))
}
