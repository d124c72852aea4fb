/**
 * Current User Handlers
 *
 * GET /api/users/me  - public fields of the authenticated user
 * PUT /api/users/me  - update name and/or email
 *
 * Both sit behind the auth middleware; identity comes from the verified
 * token, re-read from the store. Changing email to an address another
 * account holds is a conflict, checked up front and again by the unique
 * constraint for races.
 */
use axum::{extract::State, response::Json};

use crate::api::{ApiResponse, ValidatedJson};
use crate::auth::handlers::types::UpdateUserRequest;
use crate::auth::users::{PublicUser, UserUpdate};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::store::StoreError;

/// Get current user handler
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ApiResponse<PublicUser>>, ApiError> {
    let record = state
        .store
        .user_by_id(user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ApiResponse::success(record.public())))
}

/// Update current user handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure, or new email already in use
/// * `404 Not Found` - user row vanished between auth and update
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<PublicUser>>, ApiError> {
    if let Some(ref email) = request.email {
        if *email != user.email && state.store.user_by_email(email).await?.is_some() {
            return Err(ApiError::conflict("Email already in use"));
        }
    }

    let updated = state
        .store
        .update_user(
            user.user_id,
            UserUpdate {
                email: request.email,
                name: request.name,
            },
        )
        .await
        .map_err(|e| match e {
            StoreError::Conflict => ApiError::conflict("Email already in use"),
            other => other.into(),
        })?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ApiResponse::success_with_message(
        updated.public(),
        "User updated successfully",
    )))
}
