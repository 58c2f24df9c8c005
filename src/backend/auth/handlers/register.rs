/**
 * Register Handler
 *
 * This module implements the registration guard for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate the request fields
 * 2. Reject the email if it is already registered
 * 3. Hash the password using bcrypt
 * 4. Store the credential record with `admin = false`
 *
 * Two concurrent registrations of the same email both pass step 2; the
 * unique index on `users.email` rejects the second insert, which is reported
 * the same way as the pre-check.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::backend::auth::users::{create_user, email_exists, NewUser};
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::server::state::AppState;
use crate::shared::validation::{require_email, require_length};
use crate::shared::SharedError;

/// Message returned when the email is already registered
pub const EMAIL_TAKEN: &str = "Error: Email is already taken!";

/// Message returned on success
pub const REGISTERED: &str = "User registered successfully!";

/// Check every registration field
pub fn validate_register(request: &RegisterRequest) -> Result<(), SharedError> {
    require_email("email", &request.email)?;
    require_length("firstName", &request.first_name, 3, 20)?;
    require_length("lastName", &request.last_name, 3, 20)?;
    require_length("password", &request.password, 6, 40)?;
    Ok(())
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If a field is invalid or the email is already taken
/// * `500 Internal Server Error` - If hashing or the database insert fails
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    tracing::info!("Registration request for: {}", request.email);

    validate_register(&request).map_err(|e| {
        tracing::warn!("Registration rejected: {}", e);
        e
    })?;

    if email_exists(&state.db_pool, &request.email).await? {
        tracing::warn!("Registration rejected, email taken: {}", request.email);
        return Err(BackendError::bad_request(EMAIL_TAKEN));
    }

    let password_hash = bcrypt::hash(&request.password, state.bcrypt_cost)?;

    let user = create_user(
        &state.db_pool,
        NewUser {
            email: request.email.clone(),
            first_name: request.first_name,
            last_name: request.last_name,
            password_hash,
            admin: false,
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::warn!("Registration lost race for email: {}", request.email);
            BackendError::bad_request(EMAIL_TAKEN)
        }
        other => BackendError::from(other),
    })?;

    tracing::info!("User registered: {} ({})", user.email, user.id);
    Ok(Json(MessageResponse::new(REGISTERED)))
}
