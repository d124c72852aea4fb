/**
 * Router Configuration
 *
 * Combines the API routes, the 404 fallback, and request tracing into the
 * final router.
 */
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Fallback handler: unknown routes get the envelope, not bare text
async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router<()> {
    configure_api_routes(state.clone())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
