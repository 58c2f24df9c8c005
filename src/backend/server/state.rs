/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The SQLite connection pool
 * - The token service (signing and validation keys)
 * - The bcrypt cost used when hashing new passwords
 *
 * Nothing in the state is mutated after startup; the pool handles its own
 * synchronization, so the struct is cheap to clone into every handler.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // Run queries against the pool
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::tokens::TokenService;
use crate::shared::AppConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Issues and validates bearer tokens
    pub tokens: TokenService,

    /// Work factor for bcrypt when storing new passwords
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Build the state from an open pool and the loaded configuration
    pub fn new(db_pool: SqlitePool, config: &AppConfig) -> Self {
        Self {
            db_pool,
            tokens: TokenService::from_config(config),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

/// Allows handlers to extract `State<SqlitePool>` directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
