//! Custom error types specific to authentication failures.
//!
//! Token failures stay distinguishable here (`InvalidToken` vs
//! `ExpiredToken`) for logging, but convert to the same client-facing
//! "Unauthorized" response. Unknown email and wrong password share the single
//! `InvalidCredentials` variant.

use adapters::StoreError;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::errors::ApiError;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const ACCOUNT_EXISTS: &str = "User already exists";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("account already exists")]
    AccountExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken,

    #[error("expired token")]
    ExpiredToken,

    #[error("token signing secret is empty")]
    MissingSecret,

    #[error("hashing error: {0}")]
    Hashing(String),

    #[error("signing error: {0}")]
    Signing(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(msg) => ApiError::Validation(msg),
            AuthError::AccountExists => ApiError::Conflict(ACCOUNT_EXISTS.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::ExpiredToken => {
                ApiError::Unauthorized(UNAUTHORIZED.to_string())
            }
            other @ (AuthError::MissingSecret
            | AuthError::Hashing(_)
            | AuthError::Signing(_)
            | AuthError::Store(_)) => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
