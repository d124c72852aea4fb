/**
 * API Route Handlers
 *
 * Route table for the HTTP surface.
 *
 * # Public
 * - `GET  /api/health`        - liveness probe
 * - `POST /api/auth/register` - user registration
 * - `POST /api/auth/login`    - user login
 * - `POST /api/auth/signout`  - 501 stub (tokens are discarded client-side)
 *
 * # Protected (bearer token, via auth middleware)
 * - `GET/PUT /api/users/me`
 * - `POST/GET /api/emails`, `GET/DELETE /api/emails/{id}`,
 *   `PATCH /api/emails/{id}/status`
 * - `POST /api/generate-email` (also gated on completed onboarding)
 * - `POST /api/user-profile`
 */
use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};

use crate::api::ApiResponse;
use crate::auth::handlers::{get_me, login, register, signout, update_me};
use crate::emails::handlers::{
    create_email, delete_email, get_email, list_emails, update_email_status,
};
use crate::generation::handlers::generate_email;
use crate::middleware::auth::auth_middleware;
use crate::onboarding::handlers::submit_profile;
use crate::server::state::AppState;

/// Liveness probe
async fn health() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(serde_json::json!({ "status": "ok" })))
}

/// Configure all API routes
///
/// Protected routes share one `auth_middleware` layer rather than each
/// handler re-parsing the Authorization header.
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/signout", post(signout));

    let protected = Router::new()
        .route("/api/users/me", get(get_me).put(update_me))
        .route("/api/emails", post(create_email).get(list_emails))
        .route("/api/emails/{id}", get(get_email).delete(delete_email))
        .route("/api/emails/{id}/status", patch(update_email_status))
        .route("/api/generate-email", post(generate_email))
        .route("/api/user-profile", post(submit_profile))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
