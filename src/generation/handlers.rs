/**
 * Email Generation Handler
 *
 * POST /api/generate-email
 *
 * Authenticated and gated on completed onboarding. Builds the fixed
 * prompt, calls the completion API, parses the result, and persists it as
 * a PENDING email owned by the caller.
 *
 * Persistence is best-effort: a failed save is logged and noted in the
 * response message, but the caller still gets the generated text. The
 * generation already cost an upstream call, and the user can save it
 * again themselves.
 */
use axum::{extract::State, response::Json};

use crate::api::{ApiResponse, ValidatedJson};
use crate::emails::types::{EmailStatus, NewEmail};
use crate::error::ApiError;
use crate::generation::prompt::{
    build_prompt, parse_generated, synthesize_to_email, GenerateEmailRequest, GeneratedEmail,
    SYSTEM_PROMPT,
};
use crate::middleware::auth::AuthUser;
use crate::onboarding::status::resolve_status;
use crate::server::state::AppState;

/// Generate email handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or unknown tone
/// * `401 Unauthorized` - no valid session
/// * `403 Forbidden` - onboarding not completed
/// * `500 Internal Server Error` - completion API failure
pub async fn generate_email(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<GenerateEmailRequest>,
) -> Result<Json<ApiResponse<GeneratedEmail>>, ApiError> {
    let status = resolve_status(state.store.as_ref(), &user).await;
    if !status.is_complete() {
        return Err(ApiError::forbidden("Please complete onboarding first"));
    }

    let prompt = build_prompt(&request);
    let text = state
        .generator
        .complete(SYSTEM_PROMPT, &prompt)
        .await
        .map_err(|e| {
            tracing::error!("email generation failed: {e}");
            ApiError::upstream("Failed to generate email")
        })?;

    let generated = parse_generated(&text);

    let record = NewEmail {
        subject: generated.subject.clone(),
        content: generated.content.clone(),
        from_email: user.email.clone(),
        to_email: synthesize_to_email(&request.recipient_name, &request.recipient_organization),
        status: EmailStatus::Pending,
    };

    match state.store.create_email(record).await {
        Ok(_) => Ok(Json(ApiResponse::success(generated))),
        Err(e) => {
            // Don't fail the request over a save error; report it instead.
            tracing::error!("failed to save generated email: {e}");
            Ok(Json(ApiResponse::success_with_message(
                generated,
                "Email generated but could not be saved",
            )))
        }
    }
}
