//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - bearer token verification for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use devconnect::backend::middleware::auth_middleware;
//! use devconnect::backend::server::AppState;
//!
//! # fn build(state: AppState) -> Router<AppState> {
//! Router::new()
//!     .route("/private", get(|| async { "ok" }))
//!     .route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
