/**
 * User Model and Database Operations
 */

use chrono::{DateTime, Utc};
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

/// User row
///
/// Not `Serialize`: responses go through `UserResponse`, which has no
/// password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, lowercased, unique
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Avatar URI
    pub avatar: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
pub async fn create_user(
    pool: &SqlitePool,
    name: String,
    email: String,
    password_hash: String,
    avatar: String,
) -> Result<User, sqlx::Error> {
    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash,
        avatar,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password_hash, avatar, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.avatar)
    .bind(user.created_at)
    .execute(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, avatar, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, avatar, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a user record, returning whether a row was removed
pub async fn delete_user<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
