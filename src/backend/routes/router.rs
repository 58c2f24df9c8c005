/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route table with the middleware stack.
 *
 * # Layers
 *
 * Applied outermost first:
 * 1. `TraceLayer` - one tracing span per request
 * 2. Identity resolver - attaches `AuthenticatedUser` when a valid bearer token is sent
 *
 * Unknown paths get a JSON 404.
 */

use axum::{http::Uri, middleware, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::resolve_identity;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, token service)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(app_state.clone(), resolve_identity))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn fallback(uri: Uri) -> BackendError {
    tracing::debug!("No route for {}", uri.path());
    BackendError::not_found(format!("No route for {}", uri.path()))
}
