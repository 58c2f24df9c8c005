/**
 * Login Handler
 *
 * This module implements the credential authenticator for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a token whose subject is the email
 * 4. Return token and public profile
 *
 * Unknown email and wrong password produce the same 401 "Bad credentials".
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{JwtResponse, LoginRequest};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::server::state::AppState;

/// Message returned for every credential mismatch
pub const BAD_CREDENTIALS: &str = "Bad credentials";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the user is not found or the password is incorrect
/// * `500 Internal Server Error` - If the database query, hash check or token signing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "yoga@studio.com",
///   "password": "test!1234"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<JwtResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, unknown email: {}", request.email);
            BackendError::authentication(BAD_CREDENTIALS)
        })?;

    if !bcrypt::verify(&request.password, &user.password_hash)? {
        tracing::warn!("Login failed, wrong password for: {}", request.email);
        return Err(BackendError::authentication(BAD_CREDENTIALS));
    }

    let token = state.tokens.issue(&user.email)?;

    tracing::info!("User logged in: {} ({})", user.email, user.id);
    Ok(Json(JwtResponse::new(token, &user)))
}
