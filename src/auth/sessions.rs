/**
 * Session Tokens
 *
 * JWT issuance and verification for stateless sessions. The signing secret
 * comes from `AuthConfig`: resolved once at startup, never read from the
 * environment per call, and never defaulted.
 *
 * Claims carry an `onboarding` flag set by the server when the user's
 * onboarding profile is written. Routes gated on onboarding trust a true
 * claim without a store round trip; a false claim only means "check the
 * store", so a token minted before onboarding still works afterwards.
 */
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::server::config::AuthConfig;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email at issuance time
    pub email: String,
    /// Whether onboarding was complete when the token was issued
    #[serde(default)]
    pub onboarding: bool,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Issue a session token for a user
///
/// # Arguments
/// * `auth` - Signing configuration (secret and expiry)
/// * `user_id` - User ID (UUID)
/// * `email` - User email
/// * `onboarding_complete` - Whether to embed the onboarding claim
pub fn issue_token(
    auth: &AuthConfig,
    user_id: Uuid,
    email: &str,
    onboarding_complete: bool,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let exp = now + (auth.token_expiry_days as u64) * 24 * 60 * 60;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        onboarding: onboarding_complete,
        exp,
        iat: now,
    };

    let key = EncodingKey::from_secret(auth.jwt_secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// Any failure (bad signature, expired, malformed) comes back as an error;
/// callers map all of them to the same authentication failure.
pub fn verify_token(
    auth: &AuthConfig,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(auth.jwt_secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
