//! Backend Module
//!
//! This module contains all server-side code for the studio booking API:
//! an Axum HTTP server over a SQLite database.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route table and router assembly
//! - **`auth`** - Credentials, JWT tokens, login and registration
//! - **`middleware`** - Identity resolver and the `AuthUser` extractor
//! - **`sessions`** - Sessions and participant rosters
//! - **`teachers`** - Teacher listing
//! - **`accounts`** - User profile and account deletion
//! - **`error`** - `BackendError` and its JSON response
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Server binary
//! ├── server/       - Initialization and state
//! ├── routes/       - Route configuration
//! ├── auth/         - Authentication
//! ├── middleware/   - Request middleware
//! ├── sessions/     - Sessions and rosters
//! ├── teachers/     - Teachers
//! ├── accounts/     - User accounts
//! └── error/        - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `TraceLayer` opens a span for the request
//! 2. The identity resolver validates any bearer token and attaches the user
//! 3. The handler runs; protected handlers require the attached user
//! 4. Errors become `{status, error, message}` JSON bodies
//!
//! # Thread Safety
//!
//! Shared state is limited to the connection pool and the immutable token
//! service, both cloned into each handler through `AppState`.

pub mod server;
pub mod routes;
pub mod auth;
pub mod middleware;
pub mod sessions;
pub mod teachers;
pub mod accounts;
pub mod error;

// Re-export commonly used items
pub use error::BackendError;
pub use server::{build_app, create_app, AppState};
