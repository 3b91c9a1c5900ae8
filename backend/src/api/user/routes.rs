//! Defines the HTTP routes for user profile data.

use axum::{middleware, routing::post, Router};

use super::handlers::profile;
use crate::auth::require_auth;
use crate::state::AppState;

pub fn user_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", post(profile))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
