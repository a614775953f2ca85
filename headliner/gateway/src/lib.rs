//! Router assembly for the headliner service, shared by the binary and the
//! integration tests.

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    Router,
};
use headliner_ai::AiState;
use headliner_core::serializers::api_error::internal;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub const BODY_LIMIT: usize = 64 * 1024;

pub fn app(ai: AiState) -> Router {
    let api = headliner_core::urls::api_router().merge(headliner_ai::urls::router(ai));

    Router::new()
        .merge(headliner_core::urls::router())
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Render a handler panic as the regular 500 error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    internal(detail).into_response()
}
