/**
 * Session Database Operations
 *
 * Plain SQL over the `sessions` and `participations` tables. Participant ids
 * are loaded alongside every session so callers always see a complete
 * `Session`.
 */

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

use crate::backend::sessions::types::{Session, SessionInput};

const SESSION_COLUMNS: &str = "id, name, description, date, teacher_id, created_at, updated_at";

/// List all sessions ordered by date
pub async fn list_sessions(pool: &SqlitePool) -> Result<Vec<Session>, sqlx::Error> {
    let mut sessions = sqlx::query_as::<_, Session>(&format!(
        "SELECT {} FROM sessions ORDER BY date, id",
        SESSION_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    let rows: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT session_id, user_id FROM participations ORDER BY session_id, user_id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_session: HashMap<i64, Vec<i64>> = HashMap::new();
    for (session_id, user_id) in rows {
        by_session.entry(session_id).or_default().push(user_id);
    }
    for session in &mut sessions {
        session.users = by_session.remove(&session.id).unwrap_or_default();
    }

    Ok(sessions)
}

/// Get a session by ID
///
/// # Returns
/// Session or None if not found
pub async fn get_session(pool: &SqlitePool, id: i64) -> Result<Option<Session>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    fetch_session(&mut *conn, id).await
}

async fn fetch_session(conn: &mut SqliteConnection, id: i64) -> Result<Option<Session>, sqlx::Error> {
    let session = sqlx::query_as::<_, Session>(&format!(
        "SELECT {} FROM sessions WHERE id = $1",
        SESSION_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    match session {
        Some(mut session) => {
            session.users = participant_ids(&mut *conn, id).await?;
            Ok(Some(session))
        }
        None => Ok(None),
    }
}

async fn participant_ids<'e, E>(executor: E, session_id: i64) -> Result<Vec<i64>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar(
        "SELECT user_id FROM participations WHERE session_id = $1 ORDER BY user_id",
    )
    .bind(session_id)
    .fetch_all(executor)
    .await
}

/// Replace the roster of `session_id` with the existing users among `user_ids`
async fn replace_participants(
    conn: &mut SqliteConnection,
    session_id: i64,
    user_ids: &[i64],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM participations WHERE session_id = $1")
        .bind(session_id)
        .execute(&mut *conn)
        .await?;

    let unique: BTreeSet<i64> = user_ids.iter().copied().collect();
    let now = Utc::now();
    for user_id in unique {
        // Unknown user ids are skipped.
        sqlx::query(
            r#"
            INSERT INTO participations (session_id, user_id, joined_at)
            SELECT $1, id, $3 FROM users WHERE id = $2
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .bind(now)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Create a session and its initial roster
pub async fn create_session(pool: &SqlitePool, input: &SessionInput) -> Result<Session, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO sessions (name, description, date, teacher_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.date)
    .bind(input.teacher_id)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    if let Some(users) = &input.users {
        replace_participants(&mut *tx, id, users).await?;
    }

    let session = fetch_session(&mut *tx, id).await?.ok_or(sqlx::Error::RowNotFound)?;
    tx.commit().await?;

    Ok(session)
}

/// Update a session; the roster is replaced only when `input.users` is set
///
/// # Returns
/// Updated session or None if not found
pub async fn update_session(
    pool: &SqlitePool,
    id: i64,
    input: &SessionInput,
) -> Result<Option<Session>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE sessions
        SET name = $1, description = $2, date = $3, teacher_id = $4, updated_at = $5
        WHERE id = $6
        "#,
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.date)
    .bind(input.teacher_id)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    if let Some(users) = &input.users {
        replace_participants(&mut *tx, id, users).await?;
    }

    let session = fetch_session(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(session)
}

/// Delete a session and, through the foreign key cascade, its roster
///
/// # Returns
/// `true` if a row was deleted
pub async fn delete_session(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Insert a roster row; fails with a unique violation when already present
pub async fn add_participant(pool: &SqlitePool, session_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO participations (session_id, user_id, joined_at) VALUES ($1, $2, $3)")
        .bind(session_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a roster row
///
/// # Returns
/// `true` if the user was a participant
pub async fn remove_participant(pool: &SqlitePool, session_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM participations WHERE session_id = $1 AND user_id = $2")
        .bind(session_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::{create_user, delete_user, NewUser};
    use crate::backend::server::config::memory_pool;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    async fn user(pool: &SqlitePool, email: &str) -> i64 {
        create_user(
            pool,
            NewUser {
                email: email.to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                password_hash: "hash".to_string(),
                admin: false,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn input(users: Option<Vec<i64>>) -> SessionInput {
        SessionInput {
            name: "Morning Flow".to_string(),
            description: "Gentle vinyasa".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
            teacher_id: Some(1),
            users,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_session() {
        let pool = memory_pool().await;
        let alice = user(&pool, "alice@studio.com").await;

        let created = create_session(&pool, &input(Some(vec![alice, alice, 999]))).await.unwrap();
        assert_eq!(created.users, vec![alice]);
        assert_eq!(created.teacher_id, Some(1));

        let fetched = get_session(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_sessions_includes_rosters() {
        let pool = memory_pool().await;
        let alice = user(&pool, "alice@studio.com").await;
        let first = create_session(&pool, &input(Some(vec![alice]))).await.unwrap();
        let second = create_session(&pool, &input(None)).await.unwrap();

        let sessions = list_sessions(&pool).await.unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, first.id);
        assert_eq!(sessions[0].users, vec![alice]);
        assert_eq!(sessions[1].id, second.id);
        assert!(sessions[1].users.is_empty());
    }

    #[tokio::test]
    async fn test_update_session() {
        let pool = memory_pool().await;
        let alice = user(&pool, "alice@studio.com").await;
        let bob = user(&pool, "bob@studio.com").await;
        let session = create_session(&pool, &input(Some(vec![alice]))).await.unwrap();

        let mut changes = input(None);
        changes.name = "Evening Flow".to_string();
        let updated = update_session(&pool, session.id, &changes).await.unwrap().unwrap();
        assert_eq!(updated.name, "Evening Flow");
        assert_eq!(updated.users, vec![alice]);

        let updated = update_session(&pool, session.id, &input(Some(vec![bob]))).await.unwrap().unwrap();
        assert_eq!(updated.users, vec![bob]);

        assert!(update_session(&pool, 9999, &input(None)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_participants() {
        let pool = memory_pool().await;
        let alice = user(&pool, "alice@studio.com").await;
        let session = create_session(&pool, &input(None)).await.unwrap();

        add_participant(&pool, session.id, alice).await.unwrap();
        match add_participant(&pool, session.id, alice).await.unwrap_err() {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("Expected unique violation, got {:?}", other),
        }
        assert_eq!(get_session(&pool, session.id).await.unwrap().unwrap().users, vec![alice]);

        assert!(remove_participant(&pool, session.id, alice).await.unwrap());
        assert!(!remove_participant(&pool, session.id, alice).await.unwrap());
    }

    #[tokio::test]
    async fn test_deletes_cascade_to_roster() {
        let pool = memory_pool().await;
        let alice = user(&pool, "alice@studio.com").await;
        let session = create_session(&pool, &input(Some(vec![alice]))).await.unwrap();

        assert!(delete_user(&pool, alice).await.unwrap());
        assert!(get_session(&pool, session.id).await.unwrap().unwrap().users.is_empty());

        assert!(delete_session(&pool, session.id).await.unwrap());
        assert!(!delete_session(&pool, session.id).await.unwrap());
        assert!(get_session(&pool, session.id).await.unwrap().is_none());
    }
}
