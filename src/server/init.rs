/**
 * Server Initialization
 *
 * Assembles the application: connect to Postgres, run migrations, build
 * the injected services, and hand back the configured router.
 *
 * A failed connection or migration here is fatal; every route needs the
 * store, so there is no degraded mode without one.
 */
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;

use crate::generation::client::OpenAiClient;
use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;
use crate::store::PgStore;

/// Startup failure
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Connect(sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the application
///
/// # Steps
///
/// 1. Connect the Postgres pool
/// 2. Run migrations from `migrations/`
/// 3. Build the store and completion client
/// 4. Assemble state and router
pub async fn create_app(config: Config) -> Result<Router, InitError> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(InitError::Connect)?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    let store = Arc::new(PgStore::new(pool));
    let generator = Arc::new(OpenAiClient::new(&config.generation));
    let state = AppState::new(store, generator, config);

    Ok(create_router(state))
}
