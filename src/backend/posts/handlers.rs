//! Post HTTP Handlers
//!
//! Every route here sits behind the auth middleware.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::service;
use crate::backend::posts::types::{CommentRequest, CreatePostRequest};
use crate::backend::server::state::AppState;
use crate::shared::{Comment, Like, Post};

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreatePostRequest>,
) -> Result<Json<Post>, BackendError> {
    let post = service::create_post(state.pool()?, user.user_id, request).await?;
    Ok(Json(post))
}

/// GET /api/posts
pub async fn list_posts(State(state): State<AppState>, AuthUser(_): AuthUser) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(service::list_posts(state.pool()?).await?))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    Ok(Json(service::get_post(state.pool()?, &id).await?))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    Ok(Json(service::delete_post(state.pool()?, &id, user.user_id).await?))
}

/// PUT /api/posts/like/{id}
pub async fn like_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    Ok(Json(service::like_post(state.pool()?, &id, user.user_id).await?))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    Ok(Json(service::unlike_post(state.pool()?, &id, user.user_id).await?))
}

/// POST /api/posts/comment/{id}
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<CommentRequest>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    Ok(Json(service::add_comment(state.pool()?, &id, user.user_id, request).await?))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn remove_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    Ok(Json(
        service::remove_comment(state.pool()?, &id, &comment_id, user.user_id).await?,
    ))
}
