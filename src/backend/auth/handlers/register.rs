/**
 * Register Handler
 *
 * POST /api/users
 *
 * # Registration Process
 *
 * 1. Trim and validate name, email and password (every failed field is reported)
 * 2. Reject an email that is already registered
 * 3. Derive the Gravatar URI
 * 4. Hash the password with bcrypt
 * 5. Store the user and return a signed token
 */

use axum::{extract::State, Json};
use bcrypt::hash;
use sqlx::SqlitePool;
use validator::Validate;

use crate::backend::auth::avatar::gravatar_url;
use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;

/// bcrypt work factor for stored passwords
pub const PASSWORD_HASH_COST: u32 = 10;

/// Register a user and issue their first token
pub async fn register_user(
    pool: &SqlitePool,
    jwt_secret: &str,
    request: RegisterRequest,
) -> Result<String, BackendError> {
    let request = request.normalized();
    request.validate()?;

    if get_user_by_email(pool, &request.email).await?.is_some() {
        return Err(BackendError::conflict("User already exists"));
    }

    let avatar = gravatar_url(&request.email);
    let password_hash = hash(&request.password, PASSWORD_HASH_COST)?;

    let user = create_user(pool, request.name, request.email, password_hash, avatar)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => BackendError::conflict("User already exists"),
            _ => BackendError::from(e),
        })?;

    let token = create_token(user.id, jwt_secret)?;

    tracing::info!("User registered: {} ({})", user.name, user.email);

    Ok(token)
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure or email already registered
/// * `500 Internal Server Error` - store, hashing or signing failure
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let pool = state.pool()?;
    let token = register_user(pool, state.jwt_secret(), request).await?;
    Ok(Json(TokenResponse { token }))
}
