/**
 * Authentication Middleware
 *
 * This module resolves the caller's identity once per request. It reads a
 * bearer token from the Authorization header, validates it, loads the user
 * named by the token subject and attaches an `AuthenticatedUser` to the
 * request extensions.
 *
 * The resolver never rejects a request. Public routes work without an
 * identity; protected handlers take the `AuthUser` extractor, which answers
 * 401 when no identity was attached.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::error_body;
use crate::backend::server::state::AppState;

/// Message sent when a protected route is called without an identity
pub const AUTHENTICATION_REQUIRED: &str = "Full authentication is required to access this resource";

/// Authenticated user data resolved from the bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
    pub admin: bool,
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// Any other header shape yields `None`.
pub fn parse_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Identity resolver middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates the token
/// 3. Loads the user named by the token subject
/// 4. Attaches the user to request extensions for use in handlers
///
/// Every failure is logged and the request continues unauthenticated.
pub async fn resolve_identity(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = identify(&app_state, request.headers()).await;
    if let Some(user) = identity {
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}

async fn identify(app_state: &AppState, headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let token = parse_bearer(headers)?;

    let claims = app_state
        .tokens
        .validate(token)
        .map_err(|e| tracing::warn!("Cannot set user authentication: {}", e))
        .ok()?;

    match get_user_by_email(&app_state.db_pool, &claims.sub).await {
        Ok(Some(user)) => {
            tracing::debug!("Authenticated request for {}", user.email);
            Some(AuthenticatedUser {
                id: user.id,
                email: user.email,
                admin: user.admin,
            })
        }
        Ok(None) => {
            tracing::warn!("Token subject no longer exists: {}", claims.sub);
            None
        }
        Err(e) => {
            tracing::error!("Failed to load user for token subject {}: {:?}", claims.sub, e);
            None
        }
    }
}

/// Rejection returned by `AuthUser` when no identity is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRejection {
    pub path: String,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let mut body = error_body(status, AUTHENTICATION_REQUIRED);
        body["path"] = serde_json::Value::String(self.path);
        (status, Json(body)).into_response()
    }
}

/// Axum extractor for the authenticated user
///
/// Handlers that take this parameter are protected: without a resolved
/// identity the request is answered with 401 before the handler runs.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("Unauthorized request to {}", parts.uri.path());
                AuthRejection {
                    path: parts.uri.path().to_string(),
                }
            })
    }
}
