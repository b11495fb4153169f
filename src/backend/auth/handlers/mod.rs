//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users - User registration
//! - **`login`** - POST /api/auth - User authentication
//! - **`get_me`** - GET /api/auth - Current user info
//!
//! Each handler is a thin wrapper over a service function (`register_user`,
//! `authenticate`, `current_user`) that takes the pool directly and is what
//! the unit tests exercise.

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};

pub use login::login;
pub use me::get_me;
pub use register::register;
