//! Server Module
//!
//! This module contains the code that turns configuration into a running
//! Axum application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Database pool, migrations, bootstrap admin
//! └── init.rs   - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig` from the environment or a TOML file
//! 2. **Database**: SQLite pool opened and migrated
//! 3. **Bootstrap**: administrator account created when configured
//! 4. **Router Creation**: routes and middleware configured
//!
//! # Example
//!
//! ```rust,no_run
//! use studio_booking::backend::server::create_app;
//! use studio_booking::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database and bootstrap setup
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{build_app, create_app};
pub use state::AppState;
