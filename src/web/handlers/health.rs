//! Liveness endpoint.

use crate::web::dto::HealthResponse;
use axum::Json;

/// `GET /health`
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
