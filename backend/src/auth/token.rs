//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the process-wide secret. Verification is
//! pure: signature first, then expiry with no leeway. Any decode or signature
//! failure is `InvalidToken`; a valid signature past `exp` is `ExpiredToken`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::errors::{AuthError, AuthResult};
use super::models::{SessionClaims, Subject};

pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> AuthResult<Self> {
        if secret.trim().is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub fn issue(&self, subject: &Subject, ttl: Duration) -> AuthResult<String> {
        self.issue_at(subject, ttl, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        subject: &Subject,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        let claims = SessionClaims {
            subject: subject.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Signing(format!("JWT encoding error: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })
    }
}
