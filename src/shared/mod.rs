//! Shared Module
//!
//! This module contains types that are used by every part of the backend and
//! carry no HTTP or database concerns of their own.
//!
//! # Overview
//!
//! - **`error`** - `SharedError`, raised by validation and parsing
//! - **`validation`** - explicit input-validation functions
//! - **`config`** - `AppConfig` and its builder/loaders

/// Shared error types
pub mod error;

/// Input validation helpers
pub mod validation;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AdminAccount, AppConfig, AppConfigBuilder, ConfigError};
