use axum::Json;
use crate::serializers::service_info::Health;
use crate::PROVIDER;

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        message: "Headline Rewriter API is running with Hugging Face",
        provider: PROVIDER,
    })
}
