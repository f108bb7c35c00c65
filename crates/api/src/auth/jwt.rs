//! Bearer token verification.
//!
//! Tokens are issued by the platform's account service and signed with a
//! shared HS256 secret. Only the subject matters here: it is the user id the
//! ownership gate compares against the freelancer profile's owner.
//! [`generate_access_token`] mints tokens for local tooling and tests.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rateboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload of an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Owning user id.
    pub sub: DbId,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of tokens minted by [`generate_access_token`].
    pub access_token_expiry_mins: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 15).
    ///
    /// # Panics
    ///
    /// At startup, when the secret is missing or empty or the expiry does not
    /// parse.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .expect("JWT_ACCESS_EXPIRY_MINS must be a whole number of minutes"),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }
}

/// Mint a token whose subject is `user_id`.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: iat + config.access_token_expiry_mins * 60,
        iat,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature and expiry, returning the claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
