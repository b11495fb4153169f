//! Request Extractors
//!
//! `JsonBody` is `axum::Json` with its rejection mapped onto `BackendError`,
//! so a malformed or wrongly-typed body gets the same JSON 400 as any other
//! validation failure.

use axum::extract::FromRequest;

use crate::backend::error::BackendError;

/// JSON request body
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct JsonBody<T>(pub T);
