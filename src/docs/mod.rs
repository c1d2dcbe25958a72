use crate::api::responses::{ApiTestData, ApiTestResponse};
use crate::health::responses::{HealthCheckResponse, HealthStatus};
use crate::meta;
use crate::root::responses::RootResponse;
use crate::{api, health, root};
use utoipa::OpenApi;

pub mod handlers;
#[cfg(test)]
mod tests;

#[derive(OpenApi)]
#[openapi(
    paths(root::handlers::root, health::handlers::healthcheck, api::handlers::test),
    components(schemas(
        RootResponse,
        HealthCheckResponse,
        HealthStatus,
        ApiTestResponse,
        ApiTestData
    ))
)]
struct ApiDoc;

/// The derive fills `info` from the package manifest, so it is overwritten with the
/// application's own metadata.
pub fn document() -> utoipa::openapi::OpenApi {
    let mut document = ApiDoc::openapi();
    document.info.title = String::from(meta::TITLE);
    document.info.description = Some(String::from(meta::DESCRIPTION));
    document.info.version = String::from(meta::VERSION);
    document
}
