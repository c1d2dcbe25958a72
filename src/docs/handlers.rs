use crate::docs;
use axum::response::Json;
use utoipa::openapi::OpenApi;

#[axum::debug_handler]
pub async fn openapi() -> Json<OpenApi> {
    Json(docs::document())
}
