//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - Identity resolver and the `AuthUser` extractor for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware;
//! use studio_booking::backend::middleware::resolve_identity;
//!
//! let router = router.layer(middleware::from_fn_with_state(state, resolve_identity));
//! ```

pub mod auth;

pub use auth::{parse_bearer, resolve_identity, AuthRejection, AuthUser, AuthenticatedUser};
