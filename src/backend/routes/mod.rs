//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Router assembly, middleware layers and fallback
//! - **`api_routes`** - The `/api` route table
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /api/auth/login` - User login
//! - `POST /api/auth/register` - User registration
//!
//! ## Protected
//!
//! - `/api/session` and `/api/session/{id}` - Session CRUD
//! - `/api/session/{id}/participate/{userId}` - Join and leave
//! - `/api/teacher` and `/api/teacher/{id}` - Teachers
//! - `/api/user/{id}` - Account read and delete
//!
//! Protection is enforced by the `AuthUser` extractor in each handler; the
//! identity resolver layer runs for every route.

/// Main router creation
pub mod router;

/// API route table
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
