use crate::model::HealthResponse;
use axum::Json;

pub async fn index_handler() -> &'static str {
    "Hello from burrow!"
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
