//! Backend Error Module
//!
//! This module defines the error type returned by every handler and service.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! | Variant | Status |
//! |---|---|
//! | `Validation` | 400 |
//! | `Conflict` | 400 |
//! | `Unauthorized` | 401 |
//! | `Forbidden` | 403 |
//! | `NotFound` | 404 |
//! | `Internal`, `Database`, `Hashing`, `Token` | 500 |
//!
//! `SharedError` variants are mapped onto the same table.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, FieldError};
