/**
 * Router Configuration
 *
 * Combines the health route and the API routes into a single Axum router.
 *
 * # Route Order
 *
 * 1. `GET /` health check
 * 2. API routes (users, auth, posts, profile)
 * 3. Fallback handler (JSON 404)
 *
 * Every request runs inside a `TraceLayer` span.
 */

use axum::{http::Uri, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the pool and signing secret
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(api_running));

    let router = configure_api_routes(router, &app_state);

    let router = router.fallback(not_found).layer(TraceLayer::new_for_http());

    router.with_state(app_state)
}

async fn api_running() -> &'static str {
    "API Running"
}

async fn not_found(uri: Uri) -> BackendError {
    BackendError::not_found(format!("No route for {}", uri.path()))
}
