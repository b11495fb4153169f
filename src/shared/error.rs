//! Shared Error Types
//!
//! Errors raised by the domain types themselves, independent of HTTP. The
//! backend maps each variant onto a status code.
//!
//! # Error Categories
//!
//! - `AlreadyLiked` / `NotLiked` - like state transition not allowed
//! - `NotFound` - an embedded entry (comment, experience, education) is missing
//! - `NotAuthorized` - the requester does not own the embedded entry
//!
//! # Usage
//!
//! ```rust
//! use devconnect::shared::error::SharedError;
//!
//! let error = SharedError::not_found("Comment");
//! assert_eq!(error.to_string(), "Comment does not exist");
//! ```
use thiserror::Error;

/// Errors raised by domain operations on posts and profiles
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// The user already appears in the post's like sequence
    #[error("Post already liked")]
    AlreadyLiked,

    /// The user does not appear in the post's like sequence
    #[error("Post has not yet been liked")]
    NotLiked,

    /// An embedded entry does not exist
    #[error("{entity} does not exist")]
    NotFound {
        /// What was looked up ("Comment", "Experience", ...)
        entity: String,
    },

    /// The requester is not the author of the embedded entry
    #[error("User not authorized")]
    NotAuthorized,
}

impl SharedError {
    /// Create a new not-found error for an embedded entry
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }
}
