//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! ├── conversion.rs - IntoResponse implementation
//! └── extract.rs    - `JsonBody` extractor rejecting with `BackendError`
//! ```
//!
//! # Error Types
//!
//! - `AuthenticationFailure` - 401, bad credentials
//! - `BadRequest` / `SharedError` - 400, validation and rejected transitions
//! - `NotFound` - 404, missing session/user/teacher
//! - `DatabaseError`, `PasswordHashError`, `TokenError` - 500
//!
//! Invalid tokens are not errors at this layer: the identity resolver treats
//! them as "unauthenticated" and protected handlers reject with 401.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// Request body extractor
pub mod extract;

// Re-export commonly used types
pub use conversion::error_body;
pub use extract::JsonBody;
pub use types::BackendError;
