//! Post Data Structure
//!
//! A post is a single document: the author snapshot, the text body, and two
//! embedded sequences (likes and comments), both kept most-recent-first.
//!
//! # Like Sequence
//!
//! A user appears at most once in `likes`. `like` and `unlike` are the only
//! mutations and each refuses the transition it cannot make:
//!
//! ```rust
//! use devconnect::shared::{Post, SharedError};
//! use uuid::Uuid;
//!
//! let owner = Uuid::new_v4();
//! let fan = Uuid::new_v4();
//! let mut post = Post::new(owner, "hello".into(), "Ada".into(), "//avatar".into());
//!
//! post.like(fan).unwrap();
//! assert_eq!(post.like(fan), Err(SharedError::AlreadyLiked));
//! post.unlike(fan).unwrap();
//! assert!(post.likes.is_empty());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// One entry in a post's like sequence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Like {
    /// User who liked the post
    pub user: Uuid,
}

/// A comment embedded in a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique comment ID
    pub id: Uuid,
    /// User who wrote the comment
    pub user: Uuid,
    /// Comment body
    pub text: String,
    /// Author name at the time of writing
    pub name: String,
    /// Author avatar at the time of writing
    pub avatar: String,
    /// When the comment was written
    pub date: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a fresh ID
    pub fn new(user: Uuid, text: String, name: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text,
            name,
            avatar,
            date: Utc::now(),
        }
    }
}

/// A text post with its embedded likes and comments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Unique post ID
    pub id: Uuid,
    /// Owning user
    pub user: Uuid,
    /// Post body
    pub text: String,
    /// Author name snapshot
    pub name: String,
    /// Author avatar snapshot
    pub avatar: String,
    /// Users who liked the post, most recent first
    #[serde(default)]
    pub likes: Vec<Like>,
    /// Comments, most recent first
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// When the post was created
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `user` with empty likes and comments
    pub fn new(user: Uuid, text: String, name: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Whether `user` owns this post
    pub fn is_owned_by(&self, user: Uuid) -> bool {
        self.user == user
    }

    /// Whether `user` appears in the like sequence
    pub fn is_liked_by(&self, user: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }

    /// Prepend a like for `user`
    ///
    /// Fails with `AlreadyLiked` and leaves the sequence untouched if the
    /// user already liked the post.
    pub fn like(&mut self, user: Uuid) -> Result<(), SharedError> {
        if self.is_liked_by(user) {
            return Err(SharedError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user });
        Ok(())
    }

    /// Remove the like for `user`
    ///
    /// Every entry for the user is removed, so a sequence that somehow holds
    /// duplicates comes back to at most one entry per user. Fails with
    /// `NotLiked` if the user has no entry.
    pub fn unlike(&mut self, user: Uuid) -> Result<(), SharedError> {
        if !self.is_liked_by(user) {
            return Err(SharedError::NotLiked);
        }
        self.likes.retain(|like| like.user != user);
        Ok(())
    }

    /// Prepend a comment
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Remove a comment written by `user`
    ///
    /// Fails with `NotFound` if no comment has `comment_id`, and with
    /// `NotAuthorized` if the comment belongs to someone else.
    pub fn remove_comment(&mut self, comment_id: Uuid, user: Uuid) -> Result<Comment, SharedError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or_else(|| SharedError::not_found("Comment"))?;

        if self.comments[index].user != user {
            return Err(SharedError::NotAuthorized);
        }

        Ok(self.comments.remove(index))
    }
}
