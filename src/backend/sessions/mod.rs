//! Sessions Module
//!
//! Schedulable sessions and their participant rosters.
//!
//! # Module Structure
//!
//! ```text
//! sessions/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Session model, request body, validation
//! ├── roster.rs   - Join/leave state machine
//! ├── db.rs       - Database operations
//! ├── service.rs  - Roster operations against the database
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Roster Rules
//!
//! - A user joins a session at most once; a second join is a 400
//! - Leaving a session the user never joined is a 400
//! - Joining needs both the session and the user to exist (404 otherwise)

pub mod types;
pub mod roster;
pub mod db;
pub mod service;
pub mod handlers;

pub use roster::{Roster, RosterError};
pub use types::{Session, SessionInput, SessionRequest};
