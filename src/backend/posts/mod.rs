//! Posts Module
//!
//! Text posts with embedded likes and comments.
//!
//! - **`db`** - row mapping and queries
//! - **`service`** - create, list, delete, like/unlike, comment/uncomment
//! - **`handlers`** - HTTP wrappers over the service
//! - **`types`** - request bodies

pub mod db;
pub mod handlers;
pub mod service;
pub mod types;

pub use types::{CommentRequest, CreatePostRequest};
