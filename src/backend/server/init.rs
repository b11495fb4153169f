/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`:
 *
 * 1. Open the database pool and run migrations
 * 2. Build `AppState` from the pool and the signing secret
 * 3. Create the router with all routes and middleware
 *
 * A missing database is logged and the server still starts.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing DevConnect backend server");

    let db_pool = load_database(&config.database_url).await;
    let app_state = AppState::new(db_pool, config.jwt_secret.as_str());

    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
