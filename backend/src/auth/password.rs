//! Password hashing using argon2
//!
//! Argon2id with a per-call random salt: hashing the same password twice
//! yields different strings, and verification parses the salt back out of
//! the stored hash. The work is CPU-bound, so async callers go through the
//! `spawn_blocking` wrappers.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Hashing failures
///
/// A non-matching password is NOT an error; `verify` returns `Ok(false)`
/// for that. Errors mean the hashing backend itself failed or the stored
/// hash is corrupt.
#[derive(Error, Debug)]
pub enum HashError {
    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password (blocking)
    pub fn hash(password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HashError::Hashing(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(password: String) -> Result<String, HashError> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| HashError::Hashing(format!("task join error: {}", e)))?
    }

    /// Verify a password against a stored hash (blocking)
    ///
    /// Returns `Ok(false)` for any well-formed non-matching input; errors
    /// only when the stored hash cannot be parsed.
    pub fn verify(password: &str, hash: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(hash).map_err(|e| HashError::MalformedHash(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool, HashError> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| HashError::Hashing(format!("task join error: {}", e)))?
    }
}
