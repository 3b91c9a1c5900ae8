//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse the sign-up and sign-in bodies, validate them into
//! flow inputs, and hand them to `AuthService`.

use axum::{extract::State, http::StatusCode, Json};

use super::middleware::AuthUser;
use super::models::{Login, MessageResponse, Registration, SignInRequest, SignUpRequest, TokenResponse};
use crate::errors::{ApiError, JsonBody};
use crate::state::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignUpRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let registration = Registration::try_from(req)?;
    state.auth.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User signed up successfully".to_string(),
        }),
    ))
}

pub async fn sign_in(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignInRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let login = Login::try_from(req)?;
    let token = state.auth.authenticate(login).await?;
    Ok(Json(TokenResponse { token }))
}

/// Reached only through the access guard.
pub async fn check_auth(AuthUser(claims): AuthUser) -> StatusCode {
    tracing::debug!("Session check passed for account id={}", claims.subject.id);
    StatusCode::OK
}
