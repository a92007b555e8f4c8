//! Route configuration for the alert API.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_alert, list_alerts, method_not_allowed, not_found};
use crate::state::AppState;

/// Create the alert API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let index = get(list_alerts)
        .post(create_alert)
        .fallback(method_not_allowed);

    let mut router = Router::new().route("/", index);

    if let Some(dir) = &state.config().static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    let body_limit = DefaultBodyLimit::max(state.config().max_body_bytes);

    router
        .fallback(not_found)
        .layer(body_limit)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
