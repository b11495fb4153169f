//! Request bodies for the post endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

/// New post
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// New comment on a post
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

impl CreatePostRequest {
    /// Trim surrounding whitespace so blank text fails validation
    pub fn normalized(self) -> Self {
        Self {
            text: self.text.trim().to_string(),
        }
    }
}

impl CommentRequest {
    /// Trim surrounding whitespace so blank text fails validation
    pub fn normalized(self) -> Self {
        Self {
            text: self.text.trim().to_string(),
        }
    }
}
