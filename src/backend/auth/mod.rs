//! Authentication Module
//!
//! This module handles credential storage, token issuing and the public
//! login/register endpoints.
//!
//! # Architecture
//!
//! - **`users`** - Credential record model and database operations
//! - **`tokens`** - JWT issuing and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, password and names → credential stored with a bcrypt hash
//! 2. **Login**: email and password → hash verified → token returned
//! 3. **Every other request**: bearer token → identity resolved by the middleware
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never logged
//! - Tokens are HS512 JWTs with a configurable lifetime (24h by default)
//! - Invalid credentials return 401 with no unknown-user/wrong-password distinction

/// User data model and database operations
pub mod users;

/// JWT issuing and validation
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{JwtResponse, LoginRequest, MessageResponse, RegisterRequest};
pub use handlers::{login, register};
pub use tokens::{Claims, TokenError, TokenService};
