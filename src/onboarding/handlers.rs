/**
 * Onboarding Submission Handler
 *
 * POST /api/user-profile
 *
 * Writes the onboarding profile for the authenticated user and marks
 * onboarding complete in the same atomic upsert. The owning user id comes
 * from the verified token, never from the body. Resubmission updates the
 * existing row.
 *
 * The response carries a refreshed session token with the `onboarding`
 * claim set, so subsequent gated requests skip the profile lookup.
 */
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::{ApiResponse, ValidatedJson};
use crate::auth::sessions::issue_token;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::onboarding::profiles::{Profile, ProfileSubmission};
use crate::server::state::AppState;

/// Onboarding form body
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(min = 1, message = "All fields are required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub school: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub grade: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub major: String,
}

/// Payload returned on submission
#[derive(Debug, Serialize)]
pub struct ProfileData {
    pub profile: Profile,
    /// Fresh session token carrying the onboarding claim
    pub token: String,
}

/// Onboarding profile submission handler
///
/// # Errors
///
/// * `400 Bad Request` - a required field is missing or empty
/// * `401 Unauthorized` - no valid session
/// * `500 Internal Server Error` - storage or token signing failed
pub async fn submit_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<ProfileRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProfileData>>), ApiError> {
    let profile = state
        .store
        .upsert_profile(
            user.user_id,
            ProfileSubmission {
                full_name: request.full_name,
                school: request.school,
                grade: request.grade,
                major: request.major,
            },
        )
        .await?;

    // The claim is only minted after the profile write commits.
    let token = issue_token(&state.config.auth, user.user_id, &user.email, true)?;

    tracing::info!("onboarding completed for {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            ProfileData { profile, token },
            "Onboarding completed",
        )),
    ))
}
