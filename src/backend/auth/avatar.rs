/**
 * Avatar URIs
 *
 * Avatars are never stored as images; each user gets a Gravatar URI derived
 * from their email. The same email always yields the same URI.
 */

/// Gravatar URI for `email`: 200px, PG rated, "mystery person" fallback
pub fn gravatar_url(email: &str) -> String {
    let digest = md5::compute(email.trim().to_lowercase().as_bytes());
    format!("//www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", digest)
}
