/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * 1. Validate email format, password length, name length
 * 2. Reject duplicate emails with a conflict
 * 3. Hash the password with bcrypt
 * 4. Create the user and return it with a fresh session token
 *
 * The duplicate check runs twice: a pre-check for the common case, and the
 * store's unique constraint for the race where two registrations interleave.
 * Both produce the same "User already exists" conflict.
 */
use axum::{extract::State, http::StatusCode, response::Json};

use crate::api::{ApiResponse, ValidatedJson};
use crate::auth::handlers::types::{AuthData, RegisterRequest};
use crate::auth::sessions::issue_token;
use crate::auth::users::NewUser;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::store::StoreError;

/// bcrypt work factor for password hashes
pub const BCRYPT_COST: u32 = 10;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure, or email already registered
/// * `500 Internal Server Error` - hashing, storage, or token signing failed
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    if state.store.user_by_email(&request.email).await?.is_some() {
        tracing::warn!("registration for existing email: {}", request.email);
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = bcrypt::hash(&request.password, BCRYPT_COST)?;

    let user = state
        .store
        .create_user(NewUser {
            email: request.email,
            name: request.name,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::Conflict => ApiError::conflict("User already exists"),
            other => other.into(),
        })?;

    // A brand-new user has no onboarding profile yet.
    let token = issue_token(&state.config.auth, user.id, &user.email, false)?;

    tracing::info!("user registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            AuthData {
                user: user.public(),
                token,
            },
            "User registered successfully",
        )),
    ))
}
