//! Session token issuance and verification
//!
//! Sessions are stateless: the only record of a login is the signed token
//! held by the client. Keys are pre-computed once at startup and cached in
//! AppState.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use property_manager_shared::errors::AuthError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Token claims: the manager id plus issue/expiry timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (building manager ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed signing keys, expensive to derive, cheap to clone
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new keys from the configured secret; call once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Session token service
///
/// Construct once in `AppState::new` and share; do NOT create per-request.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    ttl: Duration,
}

impl JwtService {
    /// Create a new token service with pre-computed keys
    pub fn new(secret: &str, ttl_ms: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            ttl: Duration::milliseconds(ttl_ms),
        }
    }

    /// Issue a signed session token for a manager id
    pub fn issue(&self, manager_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: manager_id.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign session token: {}", e))
    }

    /// Verify a session token and return the embedded manager id
    ///
    /// Takes an `Option` so the caller does not have to distinguish "no
    /// cookie" from "bad cookie" itself; the three failure classes map to
    /// the three `AuthError` token variants.
    pub fn verify(&self, token: Option<&str>) -> Result<Uuid, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let mut validation = Validation::default();
        // expiry is exact, no clock leeway
        validation.leeway = 0;

        let data =
            decode::<Claims>(token, self.keys.decoding(), &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                }
            })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }

    /// Token lifetime, also used for the cookie Max-Age
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the pre-computed keys (for sharing)
    pub fn keys(&self) -> &JwtKeys {
        &self.keys
    }
}
