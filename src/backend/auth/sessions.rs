/**
 * Session Management and JWT Tokens
 *
 * Tokens are HS256 JWTs signed with the server secret. The payload carries
 * the user id under `user.id`, plus `iat` and `exp`.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime: 100 hours
pub const TOKEN_TTL_SECS: u64 = 360_000;

/// Identity embedded in the token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUser {
    /// User ID
    pub id: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Parsed user ID, if the subject is a well-formed UUID
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.user.id).ok()
    }
}

/// Create a JWT token for a user
pub fn create_token(user_id: Uuid, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp().max(0) as u64;

    let claims = Claims {
        user: TokenUser {
            id: user_id.to_string(),
        },
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Verify signature and expiry, and decode the claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}
