use axum::{Router, routing::get};
use crate::views::{health::health, service_info::index};

/// Routes served at the site root.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
}

/// Routes nested under `/api`.
pub fn api_router() -> Router {
    Router::new()
        .route("/health", get(health))
}
