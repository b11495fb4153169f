//! DevConnect - Main Library
//!
//! DevConnect is a small developer social-network backend built on Axum and
//! SQLite. Users register and log in with JWT bearer tokens, publish text
//! posts, like and comment on each other's posts, and maintain a profile.
//!
//! # Module Structure
//!
//! The library is organized into two modules:
//!
//! - **`shared`** - Domain types serialized over the JSON API
//!   - Posts with embedded likes and comments
//!   - Profiles with embedded experience and education entries
//!   - Domain error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routing and auth middleware
//!   - User registration, login and JWT sessions
//!   - Post and profile services backed by a `sqlx` SQLite pool
//!
//! # Usage
//!
//! ```rust,no_run
//! use devconnect::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for domain rule violations (already liked, not found)
//! - `backend::error::BackendError` for everything a handler can return; it
//!   converts into a JSON HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
