use axum::{Router, routing::post};
use crate::views::headline_rewrite::rewrite;
use crate::AiState;

pub fn router(state: AiState) -> Router {
    Router::new()
        .route("/rewrite", post(rewrite))
        .with_state(state)
}
