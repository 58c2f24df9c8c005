/**
 * Teacher Handlers
 *
 * - `GET /api/teacher` - List teachers
 * - `GET /api/teacher/{id}` - Get one teacher
 *
 * Both require an authenticated caller.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::teachers::db::{self, Teacher};
use crate::shared::validation::parse_id;

pub async fn list_teachers(
    AuthUser(_user): AuthUser,
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Teacher>>, BackendError> {
    let teachers = db::list_teachers(&pool).await?;
    Ok(Json(teachers))
}

/// # Errors
///
/// * `400 Bad Request` - If the id is not an integer
/// * `404 Not Found` - If no teacher has that id
pub async fn get_teacher(
    AuthUser(_user): AuthUser,
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
) -> Result<Json<Teacher>, BackendError> {
    let id = parse_id(&raw_id)?;

    let teacher = db::get_teacher(&pool, id).await?.ok_or_else(|| {
        tracing::warn!("Teacher not found: {}", id);
        BackendError::not_found("Teacher not found")
    })?;

    Ok(Json(teacher))
}
