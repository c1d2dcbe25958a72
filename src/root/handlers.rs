use crate::meta;
use crate::root::responses::RootResponse;
use axum::response::Json;

pub const GREETING: &str = "Flow Puzzle API is running!";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = RootResponse))
)]
#[axum::debug_handler]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: String::from(GREETING),
        version: String::from(meta::VERSION),
    })
}
