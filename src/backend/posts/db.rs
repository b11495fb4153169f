//! Database operations for posts
//!
//! Each post is one row. Likes and comments are stored as JSON arrays in the
//! same row so a post is always read and written as a whole document.
//! Functions take any `SqliteExecutor` so they run on the pool or inside a
//! transaction.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::shared::{Comment, Like, Post};

const SELECT_POST: &str = r#"
    SELECT id, user_id, text, name, avatar, likes, comments, created_at
    FROM posts
"#;

/// Row shape of the `posts` table
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    text: String,
    name: String,
    avatar: String,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            user: row.user_id,
            text: row.text,
            name: row.name,
            avatar: row.avatar,
            likes: row.likes.0,
            comments: row.comments.0,
            date: row.created_at,
        }
    }
}

/// Insert a new post
pub async fn insert_post<'e>(executor: impl SqliteExecutor<'e>, post: &Post) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO posts (id, user_id, text, name, avatar, likes, comments, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(post.id)
    .bind(post.user)
    .bind(&post.text)
    .bind(&post.name)
    .bind(&post.avatar)
    .bind(Json(&post.likes))
    .bind(Json(&post.comments))
    .bind(post.date)
    .execute(executor)
    .await?;

    Ok(())
}

/// Get a post by ID
pub async fn get_post<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} WHERE id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Post::from))
}

/// All posts, newest first
///
/// Posts created in the same instant come back in reverse insertion order.
pub async fn list_posts<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Post>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} ORDER BY created_at DESC, rowid DESC"))
        .fetch_all(executor)
        .await?;

    Ok(rows.into_iter().map(Post::from).collect())
}

/// Replace the like sequence of a post
pub async fn update_likes<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    likes: &[Like],
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE posts SET likes = ? WHERE id = ?")
        .bind(Json(likes))
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Replace the comment sequence of a post
pub async fn update_comments<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    comments: &[Comment],
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE posts SET comments = ? WHERE id = ?")
        .bind(Json(comments))
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Delete a post, returning whether a row was removed
pub async fn delete_post<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete every post owned by a user
pub async fn delete_posts_by_user<'e>(executor: impl SqliteExecutor<'e>, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE user_id = ?")
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
