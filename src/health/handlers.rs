use crate::env;
use crate::health::responses::{HealthCheckResponse, HealthStatus};
use axum::response::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthCheckResponse))
)]
#[axum::debug_handler]
pub async fn healthcheck() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: HealthStatus::Healthy,
        environment: env::current_environment(),
    })
}
