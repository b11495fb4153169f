/**
 * Login Handler
 *
 * POST /api/auth
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Return a signed token
 *
 * Unknown emails and wrong passwords produce the same response.
 */

use axum::{extract::State, Json};
use bcrypt::verify;
use sqlx::SqlitePool;
use validator::Validate;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Verify credentials and issue a token
pub async fn authenticate(
    pool: &SqlitePool,
    jwt_secret: &str,
    request: LoginRequest,
) -> Result<String, BackendError> {
    let request = LoginRequest {
        email: request.email.trim().to_lowercase(),
        password: request.password,
    };
    request.validate()?;

    let user = get_user_by_email(pool, &request.email).await?.ok_or_else(|| {
        tracing::warn!("Login for unknown email: {}", request.email);
        BackendError::validation("credentials", INVALID_CREDENTIALS)
    })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(BackendError::validation("credentials", INVALID_CREDENTIALS));
    }

    let token = create_token(user.id, jwt_secret)?;

    tracing::info!("User logged in: {}", user.id);

    Ok(token)
}

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed input or invalid credentials
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let pool = state.pool()?;
    let token = authenticate(pool, state.jwt_secret(), request).await?;
    Ok(Json(TokenResponse { token }))
}
