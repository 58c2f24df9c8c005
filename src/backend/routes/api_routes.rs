/**
 * API Route Table
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/register` - User registration
 *
 * ## Sessions
 * - `GET /api/session`, `POST /api/session`
 * - `GET /api/session/{id}`, `PUT /api/session/{id}`, `DELETE /api/session/{id}`
 * - `POST /api/session/{id}/participate/{userId}`
 * - `DELETE /api/session/{id}/participate/{userId}`
 *
 * ## Teachers
 * - `GET /api/teacher`, `GET /api/teacher/{id}`
 *
 * ## Accounts
 * - `GET /api/user/{id}`, `DELETE /api/user/{id}`
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::accounts::{delete_user, get_user};
use crate::backend::auth::{login, register};
use crate::backend::server::state::AppState;
use crate::backend::sessions::handlers as sessions;
use crate::backend::teachers::{get_teacher, list_teachers};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        // Session endpoints
        .route(
            "/api/session",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/api/session/{id}",
            get(sessions::get_session)
                .put(sessions::update_session)
                .delete(sessions::delete_session),
        )
        .route(
            "/api/session/{id}/participate/{user_id}",
            post(sessions::participate).delete(sessions::no_longer_participate),
        )
        // Teacher endpoints
        .route("/api/teacher", get(list_teachers))
        .route("/api/teacher/{id}", get(get_teacher))
        // Account endpoints
        .route("/api/user/{id}", get(get_user).delete(delete_user))
}
