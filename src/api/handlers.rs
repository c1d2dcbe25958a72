use crate::api::responses::{ApiTestData, ApiTestResponse};
use axum::response::Json;

/// Lets the front-end confirm it can reach the API through CORS.
#[utoipa::path(
    get,
    path = "/api/test",
    responses((status = 200, description = "API is reachable", body = ApiTestResponse))
)]
#[axum::debug_handler]
pub async fn test() -> Json<ApiTestResponse> {
    Json(ApiTestResponse {
        message: String::from("API test successful"),
        data: ApiTestData { test: true },
    })
}
