//! Shared Error Types
//!
//! This module defines error types that are shared by every layer of the
//! backend: request validation, configuration and the domain services.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed validation
//! - `MalformedId` - A path identifier was not an integer
//! - `MalformedBody` - A request body could not be read into the expected shape
//!
//! # Usage
//!
//! ```rust
//! use studio_booking::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "must not be blank");
//! ```
use thiserror::Error;

/// Shared error types raised outside the HTTP layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A path identifier could not be parsed
    #[error("Invalid identifier: '{raw}'")]
    MalformedId {
        /// The raw value received
        raw: String,
    },

    /// A request body was not valid JSON or did not match the expected shape
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed identifier error
    pub fn malformed_id(raw: impl Into<String>) -> Self {
        Self::MalformedId { raw: raw.into() }
    }

    /// Create a new malformed body error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }
}
