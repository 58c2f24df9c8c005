/**
 * Session Types
 *
 * The stored session as returned to clients, the create/update request body
 * and its validation.
 *
 * Dates are accepted either as RFC 3339 timestamps or as plain `YYYY-MM-DD`
 * days (taken as midnight UTC) and are always returned as RFC 3339.
 */

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::validation::require_text;
use crate::shared::SharedError;

/// Longest accepted session name
pub const MAX_NAME_LEN: usize = 50;

/// Longest accepted session description
pub const MAX_DESCRIPTION_LEN: usize = 2500;

/// A session with its participant ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "teacher_id")]
    pub teacher_id: Option<i64>,
    pub description: String,
    /// Participant user ids, ascending
    #[sqlx(skip)]
    pub users: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/session` and `PUT /api/session/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    /// When present, replaces the roster
    #[serde(default)]
    pub users: Option<Vec<i64>>,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInput {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub teacher_id: Option<i64>,
    pub users: Option<Vec<i64>>,
}

impl SessionRequest {
    /// Check the fields and produce the input for the database layer
    pub fn validate(self) -> Result<SessionInput, SharedError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        require_text("description", &self.description, MAX_DESCRIPTION_LEN)?;
        let date = self
            .date
            .ok_or_else(|| SharedError::validation("date", "must not be null"))?;

        Ok(SessionInput {
            name: self.name.trim().to_string(),
            description: self.description,
            date,
            teacher_id: self.teacher_id,
            users: self.users,
        })
    }
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` day
pub fn parse_session_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| format!("invalid date '{}'", raw))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| parse_session_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
