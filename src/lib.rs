//! Studio Booking - Main Library
//!
//! A session-booking backend for a yoga studio: users register and log in
//! with JWT bearer tokens, browse sessions and teachers, and join or leave
//! session rosters.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, validation helpers and shared error types
//! - **`backend`** - Axum HTTP server, SQLite persistence, handlers
//!
//! # Usage
//!
//! ```rust,no_run
//! use studio_booking::backend::server::init::create_app;
//! use studio_booking::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Types and helpers shared across the backend
pub mod shared;

/// Server-side code
pub mod backend;
