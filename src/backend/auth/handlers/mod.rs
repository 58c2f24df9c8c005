//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the public authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//!
//! # Example
//!
//! ```rust,ignore
//! use studio_booking::backend::auth::handlers::{login, register};
//! use axum::{routing::post, Router};
//!
//! let router = Router::new()
//!     .route("/api/auth/register", post(register))
//!     .route("/api/auth/login", post(login));
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{JwtResponse, LoginRequest, MessageResponse, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use register::register;
