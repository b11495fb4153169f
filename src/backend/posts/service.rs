/**
 * Post Service
 *
 * Business operations on posts. Each function takes the pool directly and
 * returns `BackendError`, so handlers only extract and wrap.
 *
 * Read-modify-write operations (like, unlike, comment, uncomment, delete)
 * load the post and write it back inside one transaction.
 */

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::posts::db;
use crate::backend::server::config::begin_immediate;
use crate::backend::posts::types::{CommentRequest, CreatePostRequest};
use crate::shared::{Comment, Like, Post, SharedError};

const POST_NOT_FOUND: &str = "Post not found";

/// Parse a post ID from a path segment
///
/// A malformed ID cannot match any post, so it is reported as missing.
pub fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found(POST_NOT_FOUND))
}

/// Create a post authored by `author_id`
pub async fn create_post(
    pool: &SqlitePool,
    author_id: Uuid,
    request: CreatePostRequest,
) -> Result<Post, BackendError> {
    let request = request.normalized();
    request.validate()?;

    let author = get_user_by_id(pool, author_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    let post = Post::new(author.id, request.text, author.name, author.avatar);
    db::insert_post(pool, &post).await?;

    tracing::info!("Post {} created by {}", post.id, author_id);

    Ok(post)
}

/// All posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, BackendError> {
    Ok(db::list_posts(pool).await?)
}

/// One post by ID
pub async fn get_post(pool: &SqlitePool, id: &str) -> Result<Post, BackendError> {
    let id = parse_post_id(id)?;
    db::get_post(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))
}

/// Delete a post owned by `requester`, returning the removed post
pub async fn delete_post(pool: &SqlitePool, id: &str, requester: Uuid) -> Result<Post, BackendError> {
    let id = parse_post_id(id)?;
    let mut tx = begin_immediate(pool).await?;

    let post = db::get_post(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    if !post.is_owned_by(requester) {
        tracing::warn!("User {} tried to delete post {} owned by {}", requester, id, post.user);
        return Err(BackendError::forbidden(SharedError::NotAuthorized.to_string()));
    }

    db::delete_post(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!("Post {} removed", id);

    Ok(post)
}

/// Like a post, returning the updated like sequence
pub async fn like_post(pool: &SqlitePool, id: &str, user: Uuid) -> Result<Vec<Like>, BackendError> {
    let id = parse_post_id(id)?;
    let mut tx = begin_immediate(pool).await?;

    let mut post = db::get_post(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    post.like(user)?;
    db::update_likes(&mut *tx, id, &post.likes).await?;
    tx.commit().await?;

    Ok(post.likes)
}

/// Remove a like, returning the updated like sequence
pub async fn unlike_post(pool: &SqlitePool, id: &str, user: Uuid) -> Result<Vec<Like>, BackendError> {
    let id = parse_post_id(id)?;
    let mut tx = begin_immediate(pool).await?;

    let mut post = db::get_post(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    post.unlike(user)?;
    db::update_likes(&mut *tx, id, &post.likes).await?;
    tx.commit().await?;

    Ok(post.likes)
}

/// Comment on a post, returning the updated comment sequence
pub async fn add_comment(
    pool: &SqlitePool,
    id: &str,
    user: Uuid,
    request: CommentRequest,
) -> Result<Vec<Comment>, BackendError> {
    let request = request.normalized();
    request.validate()?;
    let id = parse_post_id(id)?;

    let author = get_user_by_id(pool, user)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    let mut tx = begin_immediate(pool).await?;

    let mut post = db::get_post(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    post.add_comment(Comment::new(author.id, request.text, author.name, author.avatar));
    db::update_comments(&mut *tx, id, &post.comments).await?;
    tx.commit().await?;

    Ok(post.comments)
}

/// Remove a comment written by `user`, returning the updated comment sequence
pub async fn remove_comment(
    pool: &SqlitePool,
    id: &str,
    comment_id: &str,
    user: Uuid,
) -> Result<Vec<Comment>, BackendError> {
    let id = parse_post_id(id)?;
    let comment_id = Uuid::parse_str(comment_id).map_err(|_| SharedError::not_found("Comment"))?;

    let mut tx = begin_immediate(pool).await?;

    let mut post = db::get_post(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    post.remove_comment(comment_id, user)?;
    db::update_comments(&mut *tx, id, &post.comments).await?;
    tx.commit().await?;

    Ok(post.comments)
}
