//! Shared Module
//!
//! Domain types that travel over the JSON API. Nothing in here touches the
//! database or HTTP; the backend loads these types, mutates them through
//! their methods and persists them again.

/// Post, like and comment documents
pub mod post;

/// Profile documents
pub mod profile;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use post::{Comment, Like, Post};
pub use profile::{Education, Experience, Profile, ProfileView, Social};
