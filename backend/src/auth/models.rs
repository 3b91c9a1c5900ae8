//! Data structures for authentication-related entities.
//!
//! This module defines the sign-up and sign-in request bodies, the validated
//! inputs the flows accept, and the claims carried inside session tokens.

use adapters::{CredentialRecord, Role};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};

/// Body of `POST /signup`. Every field is optional at the wire level so a
/// missing field becomes a validation error instead of a parser rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub is_admin: bool,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /signin`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    #[serde(default)]
    pub is_admin: bool,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Validated input of the registration flow.
pub struct Registration {
    pub role: Role,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Validated input of the authentication flow.
pub struct Login {
    pub role: Role,
    pub email: String,
    pub password: String,
}

fn required(value: Option<String>, field: &str) -> AuthResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AuthError::Validation(format!("{} is required", field))),
    }
}

impl TryFrom<SignUpRequest> for Registration {
    type Error = AuthError;

    fn try_from(req: SignUpRequest) -> AuthResult<Self> {
        let username = required(req.username, "username")?;
        if username.trim().is_empty() {
            return Err(AuthError::Validation("username is required".to_string()));
        }
        let email = required(req.email, "email")?;
        if email.trim() != email {
            return Err(AuthError::Validation(
                "email must not start or end with whitespace".to_string(),
            ));
        }
        Ok(Registration {
            role: Role::from_admin_flag(req.is_admin),
            username,
            email,
            password: required(req.password, "password")?,
        })
    }
}

impl TryFrom<SignInRequest> for Login {
    type Error = AuthError;

    fn try_from(req: SignInRequest) -> AuthResult<Self> {
        Ok(Login {
            role: Role::from_admin_flag(req.is_admin),
            email: required(req.email, "email")?,
            password: required(req.password, "password")?,
        })
    }
}

/// Identity carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "userId")]
    pub id: u64,
    #[serde(rename = "userName")]
    pub name: String,
    #[serde(rename = "userEmail")]
    pub email: String,
    pub role: Role,
}

impl From<&CredentialRecord> for Subject {
    fn from(record: &CredentialRecord) -> Self {
        Subject {
            id: record.id,
            name: record.username.clone(),
            email: record.email.clone(),
            role: record.role,
        }
    }
}

/// Full token payload: the subject plus issue and expiry times (Unix seconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub subject: Subject,
    pub iat: i64,
    pub exp: i64,
}
