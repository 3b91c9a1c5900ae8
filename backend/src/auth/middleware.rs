//! Middleware for protecting authenticated routes.
//!
//! `require_auth` reads `Authorization: Bearer <token>`, verifies it and
//! stores the claims in the request extensions before the protected handler
//! runs. Any failure ends the request with 401. Handlers pick up the claims
//! through the `AuthUser` extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use super::errors::{AuthError, AuthResult};
use super::models::SessionClaims;
use crate::state::AppState;

/// Verified claims of the caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionClaims);

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = bearer_token(request.headers())
        .and_then(|token| state.auth.verify_token(token))
        .map_err(|err| {
            tracing::debug!("Rejected {} {}: {}", request.method(), request.uri().path(), err);
            err
        })?;

    request.extensions_mut().insert(AuthUser(claims));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> AuthResult<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::InvalidToken)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidToken);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}
