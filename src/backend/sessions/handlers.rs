/**
 * Session Handlers
 *
 * # Routes
 *
 * - `GET /api/session` - List sessions
 * - `POST /api/session` - Create a session
 * - `GET /api/session/{id}` - Get a session
 * - `PUT /api/session/{id}` - Update a session
 * - `DELETE /api/session/{id}` - Delete a session
 * - `POST /api/session/{id}/participate/{userId}` - Join
 * - `DELETE /api/session/{id}/participate/{userId}` - Leave
 *
 * All routes require an authenticated caller. Path ids that are not
 * integers are rejected with 400 before any lookup.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, JsonBody};
use crate::backend::middleware::AuthUser;
use crate::backend::sessions::db;
use crate::backend::sessions::service;
use crate::backend::sessions::types::{Session, SessionInput, SessionRequest};
use crate::backend::teachers::db::teacher_exists;
use crate::shared::validation::parse_id;

async fn check_teacher(pool: &SqlitePool, input: &SessionInput) -> Result<(), BackendError> {
    if let Some(teacher_id) = input.teacher_id {
        if !teacher_exists(pool, teacher_id).await? {
            tracing::warn!("Teacher not found: {}", teacher_id);
            return Err(BackendError::not_found("Teacher not found"));
        }
    }
    Ok(())
}

pub async fn list_sessions(
    AuthUser(_user): AuthUser,
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Session>>, BackendError> {
    let sessions = db::list_sessions(&pool).await?;
    Ok(Json(sessions))
}

pub async fn get_session(
    AuthUser(_user): AuthUser,
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
) -> Result<Json<Session>, BackendError> {
    let id = parse_id(&raw_id)?;

    let session = db::get_session(&pool, id).await?.ok_or_else(|| {
        tracing::warn!("Session not found: {}", id);
        BackendError::not_found("Session not found")
    })?;

    Ok(Json(session))
}

/// Create a session
///
/// # Errors
///
/// * `400 Bad Request` - If a field fails validation
/// * `404 Not Found` - If `teacher_id` names no teacher
pub async fn create_session(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    JsonBody(request): JsonBody<SessionRequest>,
) -> Result<Json<Session>, BackendError> {
    let input = request.validate().map_err(|e| {
        tracing::warn!("Session rejected: {}", e);
        e
    })?;
    check_teacher(&pool, &input).await?;

    let session = db::create_session(&pool, &input).await?;

    tracing::info!("Session {} created by {}", session.id, user.email);
    Ok(Json(session))
}

pub async fn update_session(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
    JsonBody(request): JsonBody<SessionRequest>,
) -> Result<Json<Session>, BackendError> {
    let id = parse_id(&raw_id)?;
    let input = request.validate().map_err(|e| {
        tracing::warn!("Session update rejected: {}", e);
        e
    })?;
    check_teacher(&pool, &input).await?;

    let session = db::update_session(&pool, id, &input).await?.ok_or_else(|| {
        tracing::warn!("Session not found: {}", id);
        BackendError::not_found("Session not found")
    })?;

    tracing::info!("Session {} updated by {}", id, user.email);
    Ok(Json(session))
}

pub async fn delete_session(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
) -> Result<(), BackendError> {
    let id = parse_id(&raw_id)?;

    if !db::delete_session(&pool, id).await? {
        tracing::warn!("Session not found: {}", id);
        return Err(BackendError::not_found("Session not found"));
    }

    tracing::info!("Session {} deleted by {}", id, user.email);
    Ok(())
}

pub async fn participate(
    AuthUser(_user): AuthUser,
    State(pool): State<SqlitePool>,
    Path((raw_id, raw_user_id)): Path<(String, String)>,
) -> Result<(), BackendError> {
    let id = parse_id(&raw_id)?;
    let user_id = parse_id(&raw_user_id)?;

    service::participate(&pool, id, user_id).await
}

pub async fn no_longer_participate(
    AuthUser(_user): AuthUser,
    State(pool): State<SqlitePool>,
    Path((raw_id, raw_user_id)): Path<(String, String)>,
) -> Result<(), BackendError> {
    let id = parse_id(&raw_id)?;
    let user_id = parse_id(&raw_user_id)?;

    service::no_longer_participate(&pool, id, user_id).await
}
