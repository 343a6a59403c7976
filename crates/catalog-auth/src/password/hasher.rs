//! One-way hashing for user passwords and client secrets.
//!
//! Stored values are PHC strings (`$argon2id$v=19$...`), so the salt and
//! cost parameters travel with each hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHasher as _};

use catalog_core::error::AppError;

/// Argon2id with the crate's default cost parameters.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hashes `secret` under a fresh random salt.
    pub fn hash_secret(&self, secret: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Could not hash secret: {e}")))
    }

    /// Checks `secret` against a stored PHC string.
    ///
    /// A mismatch is `Ok(false)`. A stored value that is not a PHC string
    /// is an internal error: it means the store holds a plaintext or
    /// corrupted value.
    pub fn verify_secret(&self, secret: &str, stored: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Stored hash is not a PHC string: {e}")))?;

        match Argon2::default().verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!("Could not verify secret: {e}"))),
        }
    }
}
