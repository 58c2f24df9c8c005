//! Input validation helpers
//!
//! Small, explicit checks used by the HTTP handlers before any database work
//! is done. Each returns a typed `SharedError` describing the first failure.

use crate::shared::error::SharedError;

/// Parse a path identifier such as the `{id}` in `/api/session/{id}`.
///
/// Any integer is accepted. Zero and negative ids parse and then match no row.
pub fn parse_id(raw: &str) -> Result<i64, SharedError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SharedError::malformed_id(raw))
}

/// Require a non-blank string no longer than `max` characters.
pub fn require_text(field: &str, value: &str, max: usize) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "must not be blank"));
    }
    if value.chars().count() > max {
        return Err(SharedError::validation(
            field,
            format!("must be at most {} characters", max),
        ));
    }
    Ok(())
}

/// Require a string whose length lies within `min..=max` characters.
pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), SharedError> {
    require_text(field, value, max)?;
    if value.chars().count() < min {
        return Err(SharedError::validation(
            field,
            format!("must be at least {} characters", min),
        ));
    }
    Ok(())
}

/// Basic email shape check: one `@` with a non-empty local part and a dotted domain.
pub fn require_email(field: &str, value: &str) -> Result<(), SharedError> {
    require_text(field, value, 50)?;

    let (local, domain) = value
        .split_once('@')
        .ok_or_else(|| SharedError::validation(field, "must be a well-formed email address"))?;

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if local.is_empty() || !domain_ok || value.chars().any(char::is_whitespace) {
        return Err(SharedError::validation(field, "must be a well-formed email address"));
    }
    Ok(())
}
