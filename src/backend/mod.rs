//! Backend Module
//!
//! This module contains all server-side code for DevConnect. It provides an
//! Axum HTTP server with JWT authentication and SQLite persistence.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT sessions, user records
//! - **`posts`** - Post service: create, list, fetch, delete, like, comment
//! - **`profile`** - Profile service: upsert, read, experience, education
//! - **`middleware`** - Bearer token verification
//! - **`error`** - Backend error type and its HTTP conversion
//! - **`extract`** - JSON body extractor with API-shaped rejections
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── posts/          - Posts, likes, comments
//! ├── profile/        - Profiles
//! ├── middleware/     - Request middleware
//! ├── error/          - Error types
//! └── extract.rs      - Request extractors
//! ```
//!
//! # State Management
//!
//! `AppState` carries the SQLite connection pool and the token signing
//! secret. Both are created once in `server::init` and cloned into handlers;
//! there is no other shared mutable state.
//!
//! # Error Handling
//!
//! Every handler returns `Result<Json<T>, BackendError>`. `BackendError`
//! maps onto the status codes of the API and renders a JSON body.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Posts, likes and comments
pub mod posts;

/// Developer profiles
pub mod profile;

/// Request extractors
pub mod extract;

pub use error::BackendError;
pub use server::create_app;
