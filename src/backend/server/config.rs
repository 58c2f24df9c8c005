/**
 * Server Configuration
 *
 * This module turns the application configuration into live resources:
 * the SQLite connection pool (with embedded migrations applied) and the
 * bootstrap administrator account.
 *
 * # Configuration Sources
 *
 * Values come from `AppConfig` (environment, `.env` or TOML file).
 * `DATABASE_URL` may point at a file (`sqlite://studio.db`) or at an
 * in-memory database (`sqlite::memory:`). In-memory databases are held on a
 * single pooled connection that never expires, so every request sees the
 * same data.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::auth::users::{create_user, get_user_by_email, NewUser};
use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Connections kept for file-backed databases
const MAX_FILE_CONNECTIONS: u32 = 5;

/// Open the connection pool and run migrations
///
/// # Errors
///
/// Returns the underlying sqlx error if the URL is invalid, the database
/// cannot be opened, or a migration fails.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_FILE_CONNECTIONS)
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the configured administrator if no account uses that email yet
///
/// # Returns
///
/// `true` when an account was created
pub async fn ensure_admin(pool: &SqlitePool, config: &AppConfig) -> Result<bool, BackendError> {
    let Some(admin) = &config.admin else {
        return Ok(false);
    };

    if get_user_by_email(pool, &admin.email).await?.is_some() {
        tracing::debug!("Administrator account already exists: {}", admin.email);
        return Ok(false);
    }

    let password_hash = bcrypt::hash(&admin.password, config.bcrypt_cost)?;
    create_user(
        pool,
        NewUser {
            email: admin.email.clone(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            password_hash,
            admin: true,
        },
    )
    .await?;

    tracing::info!("Created administrator account: {}", admin.email);
    Ok(true)
}

/// Fresh, migrated in-memory database for unit tests
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    connect_database("sqlite::memory:")
        .await
        .expect("Failed to create in-memory test database")
}
