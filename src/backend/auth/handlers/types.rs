/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register, login and me handlers.
 * Request fields default to empty strings so a missing field is reported as
 * a validation failure rather than a deserialization error.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::backend::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Plain password, hashed before storage
    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

impl RegisterRequest {
    /// Trim the name and normalize the email before validation
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password,
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Returned by register and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed bearer token, valid for 100 hours
    pub token: String,
}

/// User without the password hash
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            date: user.created_at,
        }
    }
}
