/**
 * Backend Error Types
 *
 * This module defines the single error type returned by HTTP handlers.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `AuthenticationFailure` - bad credentials (401)
 * - `BadRequest` / `SharedError` - malformed ids and bodies, duplicate email,
 *   rejected roster transitions, failed field validation (400)
 * - `NotFound` - missing session, user or teacher (404)
 *
 * ## Infrastructure Errors
 *
 * Database, password hashing and token signing failures all map to 500.
 * Their details are logged but never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::sessions::roster::RosterError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use studio_booking::backend::error::BackendError;
///
/// let err = BackendError::not_found("Session not found");
/// let err = BackendError::bad_request("Error: Email is already taken!");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Credentials did not match a stored account
    #[error("Authentication failed: {message}")]
    AuthenticationFailure {
        /// Human-readable error message
        message: String,
    },

    /// The request was understood but rejected
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// A referenced resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Validation or parse error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    PasswordHashError(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new authentication failure
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::AuthenticationFailure {
            message: message.into(),
        }
    }

    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `AuthenticationFailure` - 401 Unauthorized
    /// - `BadRequest`, `SharedError` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - Infrastructure errors - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::AuthenticationFailure { .. } => StatusCode::UNAUTHORIZED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_) | Self::PasswordHashError(_) | Self::TokenError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. }
            | Self::AuthenticationFailure { message }
            | Self::BadRequest { message }
            | Self::NotFound { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::DatabaseError(_) | Self::PasswordHashError(_) | Self::TokenError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl From<RosterError> for BackendError {
    fn from(err: RosterError) -> Self {
        Self::bad_request(err.to_string())
    }
}
