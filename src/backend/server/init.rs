/**
 * Server Initialization
 *
 * This module builds the Axum application from a loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Create the bootstrap administrator if one is configured
 * 3. Build the application state
 * 4. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ensure_admin};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated, or if the
/// administrator account cannot be created.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing studio-booking backend server");

    if config.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development secret");
    }

    let pool = connect_database(&config.database_url).await?;

    if ensure_admin(&pool, config).await? {
        tracing::info!("Bootstrap administrator created");
    }

    let app = build_app(pool, config);
    tracing::info!("Router configured");

    Ok(app)
}

/// Build the router around an already-open pool
pub fn build_app(pool: SqlitePool, config: &AppConfig) -> Router<()> {
    create_router(AppState::new(pool, config))
}
