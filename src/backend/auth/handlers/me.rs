/**
 * Get Current User Handler
 *
 * GET /api/auth
 *
 * Runs behind the auth middleware; returns the requester without the
 * password hash.
 */

use axum::{extract::State, Json};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Load the user behind a verified token
pub async fn current_user(pool: &SqlitePool, user_id: Uuid) -> Result<UserResponse, BackendError> {
    let user = get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    Ok(user.into())
}

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - rejected by the auth middleware
/// * `404 Not Found` - the token's user no longer exists
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = state.pool()?;
    Ok(Json(current_user(pool, user.user_id).await?))
}
