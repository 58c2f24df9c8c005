/**
 * Session Roster Service
 *
 * Adds and removes participants. Both operations check that the session
 * exists, run the requested transition through `Roster` and then persist it.
 *
 * A join that loses a race against an identical join fails on the
 * `participations` primary key and is reported as already participating.
 */

use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::sessions::db;
use crate::backend::sessions::roster::{Roster, RosterError};
use crate::backend::sessions::types::Session;

async fn load_session(pool: &SqlitePool, session_id: i64) -> Result<Session, BackendError> {
    db::get_session(pool, session_id).await?.ok_or_else(|| {
        tracing::warn!("Session not found: {}", session_id);
        BackendError::not_found("Session not found")
    })
}

/// Add `user_id` to the roster of `session_id`
///
/// # Errors
///
/// * `NotFound` - If the session or the user does not exist
/// * `BadRequest` - If the user already participates
pub async fn participate(pool: &SqlitePool, session_id: i64, user_id: i64) -> Result<(), BackendError> {
    let session = load_session(pool, session_id).await?;

    if get_user_by_id(pool, user_id).await?.is_none() {
        tracing::warn!("User not found: {}", user_id);
        return Err(BackendError::not_found("User not found"));
    }

    let mut roster = Roster::new(session.users);
    roster.join(user_id)?;

    db::add_participant(pool, session_id, user_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                BackendError::from(RosterError::AlreadyParticipating { user_id })
            }
            other => BackendError::from(other),
        })?;

    tracing::info!("User {} joined session {}", user_id, session_id);
    Ok(())
}

/// Remove `user_id` from the roster of `session_id`
///
/// # Errors
///
/// * `NotFound` - If the session does not exist
/// * `BadRequest` - If the user does not participate
pub async fn no_longer_participate(
    pool: &SqlitePool,
    session_id: i64,
    user_id: i64,
) -> Result<(), BackendError> {
    let session = load_session(pool, session_id).await?;

    let mut roster = Roster::new(session.users);
    roster.leave(user_id)?;

    if !db::remove_participant(pool, session_id, user_id).await? {
        return Err(RosterError::NotParticipating { user_id }.into());
    }

    tracing::info!("User {} left session {}", user_id, session_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::{create_user, NewUser};
    use crate::backend::server::config::memory_pool;
    use crate::backend::sessions::types::SessionInput;
    use assert_matches::assert_matches;
    use chrono::Utc;

    async fn fixture(pool: &SqlitePool) -> (i64, i64) {
        let user = create_user(
            pool,
            NewUser {
                email: "alice@studio.com".to_string(),
                first_name: "Alice".to_string(),
                last_name: "Doe".to_string(),
                password_hash: "hash".to_string(),
                admin: false,
            },
        )
        .await
        .unwrap();

        let session = db::create_session(
            pool,
            &SessionInput {
                name: "Yoga".to_string(),
                description: "Desc".to_string(),
                date: Utc::now(),
                teacher_id: None,
                users: None,
            },
        )
        .await
        .unwrap();

        (session.id, user.id)
    }

    #[tokio::test]
    async fn test_participate_once() {
        let pool = memory_pool().await;
        let (session_id, user_id) = fixture(&pool).await;

        participate(&pool, session_id, user_id).await.unwrap();
        assert_matches!(
            participate(&pool, session_id, user_id).await,
            Err(BackendError::BadRequest { .. })
        );

        let session = db::get_session(&pool, session_id).await.unwrap().unwrap();
        assert_eq!(session.users, vec![user_id]);
    }

    #[tokio::test]
    async fn test_participate_missing_entities() {
        let pool = memory_pool().await;
        let (session_id, user_id) = fixture(&pool).await;

        assert_matches!(
            participate(&pool, 9999, user_id).await,
            Err(BackendError::NotFound { .. })
        );
        assert_matches!(
            participate(&pool, session_id, 9999).await,
            Err(BackendError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn test_no_longer_participate() {
        let pool = memory_pool().await;
        let (session_id, user_id) = fixture(&pool).await;

        assert_matches!(
            no_longer_participate(&pool, session_id, user_id).await,
            Err(BackendError::BadRequest { .. })
        );

        participate(&pool, session_id, user_id).await.unwrap();
        no_longer_participate(&pool, session_id, user_id).await.unwrap();

        let session = db::get_session(&pool, session_id).await.unwrap().unwrap();
        assert!(session.users.is_empty());

        assert_matches!(
            no_longer_participate(&pool, 9999, user_id).await,
            Err(BackendError::NotFound { .. })
        );
    }
}
