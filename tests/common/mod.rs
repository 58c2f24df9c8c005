//! Common test utilities and helpers
//!
//! - `database` - In-memory test application and request helpers
//! - `auth_helpers` - Test users and tokens
#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
