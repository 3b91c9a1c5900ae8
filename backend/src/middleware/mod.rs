//! General-purpose middleware for the API.
//!
//! Layers applied to the whole router, as opposed to the per-route access
//! guard in `auth::middleware`.

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Wraps every request in a tracing span and logs its response status.
/// Headers are not recorded, so bearer tokens stay out of the logs.
pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}
