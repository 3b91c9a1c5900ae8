//! Password hashing and verification with bcrypt.
//!
//! Hashes are self-describing (`$2b$<cost>$<salt><digest>`), so verification
//! needs only the stored string. Both operations run on tokio's blocking pool.

use bcrypt::{hash, verify};

use super::errors::{AuthError, AuthResult};

/// bcrypt only reads the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> AuthResult<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AuthError::Hashing(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_COST, MAX_COST, cost
            )));
        }
        Ok(Self { cost })
    }

    /// Produces a salted hash. Passwords longer than the bcrypt input limit
    /// are refused rather than truncated.
    pub async fn hash(&self, plaintext: &str) -> AuthResult<String> {
        let hasher = *self;
        let plaintext = plaintext.to_string();
        tokio::task::spawn_blocking(move || hasher.hash_blocking(&plaintext))
            .await
            .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
    }

    /// Same as [`hash`](Self::hash) on the calling thread. Only for startup.
    pub fn hash_blocking(&self, plaintext: &str) -> AuthResult<String> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::Hashing(format!(
                "password exceeds {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }
        hash(plaintext, self.cost).map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// Returns `false` for a mismatch, an empty or oversized password, or a
    /// hash that does not parse.
    pub async fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        if plaintext.is_empty() || plaintext.len() > MAX_PASSWORD_BYTES {
            return false;
        }

        let plaintext = plaintext.to_string();
        let hashed = hashed.to_string();
        let outcome = tokio::task::spawn_blocking(move || verify(plaintext, &hashed)).await;

        match outcome {
            Ok(Ok(matched)) => matched,
            Ok(Err(e)) => {
                tracing::warn!("stored password hash could not be checked: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("password verification task failed: {}", e);
                false
            }
        }
    }
}
