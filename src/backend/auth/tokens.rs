/**
 * JWT Token Issuing and Validation
 *
 * This module issues and validates the signed, time-limited tokens that
 * identify a user on every request. Tokens are HS512 JWTs whose subject is
 * the user's email address. They are never stored server-side.
 *
 * Validation failures are classified as malformed, expired or bad-signature
 * so callers can log a precise reason, but every failure means the same
 * thing to the request pipeline: the caller is unauthenticated.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,
    /// Issued at time (Unix timestamp, seconds)
    pub iat: u64,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
}

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a JWT, or its header/payload could not be decoded
    #[error("malformed token")]
    Malformed,
    /// The expiry timestamp has passed
    #[error("token expired")]
    Expired,
    /// The signature does not match the configured secret
    #[error("invalid token signature")]
    BadSignature,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Issues and validates tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_ms: u64,
}

impl TokenService {
    /// Create a token service for `secret` issuing tokens valid for `expiration_ms`
    pub fn new(secret: &str, expiration_ms: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        // Expiry is enforced to the second.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiration_ms,
        }
    }

    /// Create a token service from the application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expiration_ms)
    }

    /// Issue a token for `subject`, valid from now for the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now_ms = now_millis();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now_ms / 1000,
            exp: now_ms.saturating_add(self.expiration_ms) / 1000,
        };
        self.sign(&claims)
    }

    /// Sign arbitrary claims with this service's key
    pub fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS512), claims, &self.encoding_key)
    }

    /// Verify signature, expiry and shape, returning the claims
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Subject of a valid token
    pub fn subject(&self, token: &str) -> Result<String, TokenError> {
        self.validate(token).map(|claims| claims.sub)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Current Unix time in seconds
pub fn now_seconds() -> u64 {
    now_millis() / 1000
}
