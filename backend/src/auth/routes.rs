//! Defines the HTTP routes specifically for authentication.
//!
//! `/signup` and `/signin` are public; `/checkauth` sits behind the
//! `require_auth` guard.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers::{check_auth, sign_in, sign_up};
use super::middleware::require_auth;
use crate::state::AppState;

pub fn auth_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/checkauth", get(check_auth))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .merge(protected)
}
