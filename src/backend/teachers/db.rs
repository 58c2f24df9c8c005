/**
 * Teacher Model and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List all teachers ordered by id
pub async fn list_teachers(pool: &SqlitePool) -> Result<Vec<Teacher>, sqlx::Error> {
    sqlx::query_as::<_, Teacher>(
        "SELECT id, first_name, last_name, created_at, updated_at FROM teachers ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Get teacher by ID
///
/// # Returns
/// Teacher or None if not found
pub async fn get_teacher(pool: &SqlitePool, id: i64) -> Result<Option<Teacher>, sqlx::Error> {
    sqlx::query_as::<_, Teacher>(
        "SELECT id, first_name, last_name, created_at, updated_at FROM teachers WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn teacher_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}
