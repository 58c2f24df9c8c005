/**
 * Account Handlers
 *
 * Profiles are returned without the password hash. An account can only be
 * deleted by its owner; deleting it removes the user from every session
 * roster.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::auth::users::{self, User};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::validation::parse_id;

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            admin: user.admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

async fn find_user(pool: &SqlitePool, id: i64) -> Result<User, BackendError> {
    users::get_user_by_id(pool, id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", id);
        BackendError::not_found("User not found")
    })
}

pub async fn get_user(
    AuthUser(_caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserDto>, BackendError> {
    let id = parse_id(&raw_id)?;
    let user = find_user(&pool, id).await?;
    Ok(Json(user.into()))
}

/// Delete the caller's own account
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not an integer
/// * `404 Not Found` - If no user has that id
/// * `401 Unauthorized` - If the account belongs to someone else
pub async fn delete_user(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
) -> Result<(), BackendError> {
    let id = parse_id(&raw_id)?;
    let user = find_user(&pool, id).await?;

    if user.email != caller.email {
        tracing::warn!("{} attempted to delete account {}", caller.email, user.id);
        return Err(BackendError::handler(
            StatusCode::UNAUTHORIZED,
            "You can only delete your own account",
        ));
    }

    if !users::delete_user(&pool, id).await? {
        return Err(BackendError::not_found("User not found"));
    }

    tracing::info!("Account deleted: {} ({})", user.email, user.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dto_hides_password() {
        let now = Utc::now();
        let user = User {
            id: 3,
            email: "bob@studio.com".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Smith".to_string(),
            password_hash: "secret-hash".to_string(),
            admin: false,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(UserDto::from(user)).unwrap();
        assert_eq!(value["firstName"], "Bob");
        assert_eq!(value["lastName"], "Smith");
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
    }
}
