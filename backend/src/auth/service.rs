//! Core business logic for the authentication system.
//!
//! `AuthService` runs the registration and authentication flows on top of a
//! `CredentialStore`, the bcrypt hasher and the token issuer, and verifies
//! tokens for the access guard. It never logs passwords, hashes or tokens.

use std::sync::Arc;

use adapters::{CredentialRecord, CredentialStore, NewCredential, StoreError};
use chrono::Duration;

use super::errors::{AuthError, AuthResult};
use super::models::{Login, Registration, SessionClaims, Subject};
use super::password::PasswordHasher;
use super::token::TokenIssuer;

/// Lifetime of a session token issued at sign-in.
pub const SESSION_TTL_SECS: i64 = 60 * 60;

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
    // Verified against when the email is unknown, so both failure paths
    // spend one bcrypt verification at the configured cost.
    decoy_hash: String,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        tokens: TokenIssuer,
    ) -> AuthResult<Self> {
        let decoy_hash = hasher.hash_blocking(DECOY_PASSWORD)?;
        Ok(Self {
            store,
            hasher,
            tokens,
            decoy_hash,
        })
    }

    /// Hashes the password and stores a new credential record. No token is
    /// issued; signing in is a separate step.
    pub async fn register(&self, registration: Registration) -> AuthResult<CredentialRecord> {
        let password_hash = self.hasher.hash(&registration.password).await?;

        let credential = NewCredential {
            username: registration.username,
            email: registration.email,
            password_hash,
            role: registration.role,
        };

        match self.store.insert(credential).await {
            Ok(record) => {
                tracing::info!("Registered {} account id={}", record.role, record.id);
                Ok(record)
            }
            Err(StoreError::Duplicate) => {
                tracing::info!("Registration rejected: {} account already exists", registration.role);
                Err(AuthError::AccountExists)
            }
            Err(e) => Err(AuthError::Store(e)),
        }
    }

    /// Checks the credentials and returns a signed session token. An unknown
    /// email and a wrong password fail identically.
    pub async fn authenticate(&self, login: Login) -> AuthResult<String> {
        let record = match self.store.find_by_email(login.role, &login.email).await? {
            Some(record) => record,
            None => {
                self.hasher.verify(&login.password, &self.decoy_hash).await;
                tracing::debug!("Sign-in failed for {} account: no such email", login.role);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self.hasher.verify(&login.password, &record.password_hash).await {
            tracing::debug!("Sign-in failed for {} account id={}: bad password", record.role, record.id);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&Subject::from(&record), Duration::seconds(SESSION_TTL_SECS))?;
        tracing::info!("Issued session token for {} account id={}", record.role, record.id);
        Ok(token)
    }

    pub fn verify_token(&self, token: &str) -> AuthResult<SessionClaims> {
        self.tokens.verify(token)
    }
}
