/**
 * Backend Error Types
 *
 * This module defines the error type shared by services and HTTP handlers.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - malformed or missing input, one entry per failed field
 * - `Conflict` - duplicate registration, like state already in place
 * - `Unauthorized` - missing or invalid bearer token
 * - `Forbidden` - requester does not own the resource
 * - `NotFound` - missing resource or malformed identifier
 *
 * ## Server Errors
 *
 * Store, hashing and signing failures are wrapped with `#[from]` so services
 * can use `?` directly. They all render as 500 with a generic message.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::shared::SharedError;

/// One failed validation rule
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Request field that failed
    pub field: String,
    /// Human-readable reason
    pub msg: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            msg: msg.into(),
        }
    }
}

/// Backend error type
///
/// ```rust
/// use devconnect::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Post not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Input failed one or more validation rules
    #[error("Validation failed")]
    Validation {
        /// Every failed field, in field-name order
        errors: Vec<FieldError>,
    },

    /// Request conflicts with stored state
    #[error("{message}")]
    Conflict { message: String },

    /// Missing or invalid credentials
    #[error("{message}")]
    Unauthorized { message: String },

    /// Authenticated but not permitted
    #[error("{message}")]
    Forbidden { message: String },

    /// Resource does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Unexpected server-side failure
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Domain rule violation from the shared types
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Validation error for a single field
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![FieldError::new(field, msg)],
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(err) => match err {
                SharedError::AlreadyLiked | SharedError::NotLiked => StatusCode::BAD_REQUEST,
                SharedError::NotFound { .. } => StatusCode::NOT_FOUND,
                SharedError::NotAuthorized => StatusCode::FORBIDDEN,
            },
            Self::Internal { .. } | Self::Database(_) | Self::Hashing(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to clients
    ///
    /// Server errors never expose their cause.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return "Server error".to_string();
        }
        match self {
            Self::Validation { errors } => errors
                .first()
                .map(|error| error.msg.clone())
                .unwrap_or_else(|| "Validation failed".to_string()),
            other => other.to_string(),
        }
    }

    /// Per-field errors, if this is a validation failure
    pub fn field_errors(&self) -> Option<Vec<FieldError>> {
        match self {
            Self::Validation { errors } => Some(errors.clone()),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for BackendError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                let field = field.to_string();
                failures.iter().map(move |failure| {
                    let msg = failure
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldError::new(field.clone(), msg)
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self::Validation { errors: fields }
    }
}

/// A request body that is not valid JSON for the target type
///
/// Reported like any other validation failure, under the `body` field.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}
