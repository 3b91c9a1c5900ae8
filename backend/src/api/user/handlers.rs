//! Handler functions for user profile API endpoints.
//!
//! Profile lookups read standard accounts from the credential store and return
//! only public fields.

use adapters::Role;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::{ApiError, JsonBody};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
}

pub async fn profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    JsonBody(req): JsonBody<ProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let email = req
        .user_email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::Validation("userEmail is required".to_string()))?;

    tracing::debug!("Profile lookup by account id={}", caller.subject.id);

    let record = state
        .store
        .find_by_email(Role::Standard, &email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse {
        username: record.username,
    }))
}
