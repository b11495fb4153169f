/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in user. The token is read from
 * `Authorization: Bearer <token>` or, for older clients, from the
 * `x-auth-token` header. The verified user ID is attached to the request
 * extensions for handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Legacy token header
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

const NO_TOKEN: &str = "No token, authorization denied";
const INVALID_TOKEN: &str = "Token is not valid";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Find the raw token in the request headers
///
/// The bearer header wins when both are present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    bearer.or_else(|| {
        headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
    })
}

/// Verify a raw token and resolve the user it was issued for
pub fn authenticate_token(token: &str, secret: &str) -> Result<AuthenticatedUser, BackendError> {
    let claims = verify_token(token, secret).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!("Token carries malformed user id: {}", claims.user.id);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    Ok(AuthenticatedUser { user_id })
}

/// Authentication middleware
///
/// 1. Extracts the token from the request headers
/// 2. Verifies signature and expiry
/// 3. Attaches the user ID to the request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = token_from_headers(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing auth token on {}", request.uri().path());
        BackendError::unauthorized(NO_TOKEN)
    })?;

    let user = authenticate_token(token, app_state.jwt_secret())?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Only valid on routes wrapped by [`auth_middleware`].
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(NO_TOKEN)
            })?;

        Ok(AuthUser(user))
    }
}
