use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::middleware::{
    content_length_middleware, logging_middleware, metrics_middleware,
    security_headers_middleware,
};
use super::state::AppState;
use super::{health, model_upload, pages, status, upload};

/// Create the full router with application state.
///
/// Static assets are served from `static_dir` under `/static`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let max_body_size = state.policy.max_body_size;

    Router::new()
        // Upload page and JSON endpoints
        .route("/", get(pages::index))
        .route("/upload", post(upload::upload_image))
        .route("/upload-model", post(model_upload::upload_model))
        .route("/api/status", get(status::service_status))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        // Body limits
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(middleware::from_fn_with_state(
            max_body_size,
            content_length_middleware,
        ))
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
