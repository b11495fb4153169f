//! Authentication Module
//!
//! User registration, login and JWT sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! ├── avatar.rs       - Gravatar URI derivation
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user created → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Me**: token → verified by the auth middleware → user returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10, random salt)
//! - Tokens are HS256 JWTs carrying `{user: {id}}`, valid for 100 hours
//! - Login failures never reveal whether the email exists

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Avatar URI derivation
pub mod avatar;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::{get_me, login, register};
