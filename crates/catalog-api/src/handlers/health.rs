//! Health check handler.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /actuator/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
