use axum::Json;
use crate::serializers::service_info::{Endpoints, ServiceInfo};
use crate::PROVIDER;

pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Headline Rewriter API is running!",
        provider: PROVIDER,
        endpoints: Endpoints {
            health: "/api/health (GET)",
            rewrite: "/api/rewrite (POST)",
        },
    })
}
