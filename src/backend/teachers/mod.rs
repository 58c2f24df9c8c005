//! Teachers Module
//!
//! Read-only access to the teachers who lead sessions. Teachers are seeded by
//! migration; the HTTP surface only lists and fetches them.
//!
//! - **`db`** - Teacher model and database operations
//! - **`handlers`** - `GET /api/teacher` and `GET /api/teacher/{id}`

pub mod db;
pub mod handlers;

pub use db::Teacher;
pub use handlers::{get_teacher, list_teachers};
