/**
 * Email CRUD Handlers
 *
 * POST   /api/emails             - create
 * GET    /api/emails?page&limit  - list (paginated, newest first)
 * GET    /api/emails/{id}        - fetch one
 * PATCH  /api/emails/{id}/status - update delivery status
 * DELETE /api/emails/{id}        - delete
 *
 * All routes sit behind the auth middleware, and every store call is
 * scoped to the caller's address. Asking for someone else's email (by id,
 * for read, status, or delete) is a 404, indistinguishable from the
 * record not existing.
 */
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::{ApiResponse, ValidatedJson};
use crate::emails::types::{Email, EmailStatus, NewEmail};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Create email request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmailRequest {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(email(message = "Invalid recipient email"))]
    pub to_email: String,
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Pagination block in list responses
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// List response payload
#[derive(Debug, Serialize)]
pub struct EmailList {
    pub emails: Vec<Email>,
    pub pagination: Pagination,
}

/// Status update request
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// Create email handler
pub async fn create_email(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateEmailRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Email>>), ApiError> {
    let email = state
        .store
        .create_email(NewEmail {
            subject: request.subject,
            content: request.content,
            from_email: user.email,
            to_email: request.to_email,
            status: EmailStatus::Pending,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            email,
            "Email created successfully",
        )),
    ))
}

/// List emails handler
pub async fn list_emails(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<EmailList>>, ApiError> {
    let page = query.page.max(1);
    let limit = query.limit.clamp(1, 100);

    let result = state
        .store
        .emails_for_owner(&user.email, page, limit)
        .await?;

    let total_pages = (result.total + limit - 1) / limit;

    Ok(Json(ApiResponse::success(EmailList {
        emails: result.emails,
        pagination: Pagination {
            page,
            limit,
            total: result.total,
            total_pages,
        },
    })))
}

/// Get single email handler
pub async fn get_email(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Email>>, ApiError> {
    let email = state
        .store
        .email_by_id(id, &user.email)
        .await?
        .ok_or_else(|| ApiError::not_found("Email not found"))?;

    Ok(Json(ApiResponse::success(email)))
}

/// Update email status handler
///
/// # Errors
///
/// * `400 Bad Request` - status outside {PENDING, SENT, FAILED}
/// * `404 Not Found` - no such email for this caller
pub async fn update_email_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let status = EmailStatus::parse(&request.status)
        .ok_or_else(|| ApiError::validation("Invalid status"))?;

    let updated = state
        .store
        .set_email_status(id, &user.email, status)
        .await?;
    if !updated {
        return Err(ApiError::not_found("Email not found"));
    }

    Ok(Json(ApiResponse::success_with_message(
        serde_json::json!({}),
        "Email status updated successfully",
    )))
}

/// Delete email handler
pub async fn delete_email(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let deleted = state.store.delete_email(id, &user.email).await?;
    if !deleted {
        return Err(ApiError::not_found("Email not found"));
    }

    Ok(Json(ApiResponse::success_with_message(
        serde_json::json!({}),
        "Email deleted successfully",
    )))
}
