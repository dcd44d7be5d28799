pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::prediction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/predict",
            post(handlers::handle_predict).fallback(handlers::handle_method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
