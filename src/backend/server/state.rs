/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. It holds
 * the connection pool and the token signing secret; both are cheap to clone
 * and immutable after startup.
 *
 * # Example
 *
 * ```rust,no_run
 * use devconnect::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let pool = state.pool();
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::backend::error::BackendError;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` if the database could not be opened at startup. Handlers go
    /// through [`AppState::pool`], which turns that into a 500.
    pub db_pool: Option<SqlitePool>,

    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(db_pool: Option<SqlitePool>, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            db_pool,
            jwt_secret: jwt_secret.into(),
        }
    }

    /// The connection pool, or an internal error when none is configured
    pub fn pool(&self) -> Result<&SqlitePool, BackendError> {
        self.db_pool.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            BackendError::internal("Database not configured")
        })
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
