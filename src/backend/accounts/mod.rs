//! Accounts Module
//!
//! Read and delete user accounts.
//!
//! - `GET /api/user/{id}` - Public profile of any user
//! - `DELETE /api/user/{id}` - Delete the caller's own account
//!
//! Deleting another user's account is rejected with 401.

pub mod handlers;

pub use handlers::{delete_user, get_user, UserDto};
