//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, health route, fallback, tracing
//! - **`api_routes`** - Users, auth, posts and profile endpoints
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnect::backend::routes::create_router;
//! use devconnect::backend::server::state::AppState;
//!
//! let app_state = AppState::new(None, "dev-secret");
//! let router = create_router(app_state);
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
