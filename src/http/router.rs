use crate::http::{cors, middleware};
use crate::{api, docs, health, root};
use axum::{routing::get, Router};
use tower::ServiceBuilder;

pub fn new() -> Router {
    let cors_policy = cors::layer();
    tracing::info!("Initialized HTTP configuration.");

    let api_routes = Router::new().route("/test", get(api::handlers::test));

    Router::new()
        .route("/", get(root::handlers::root))
        .route("/health", get(health::handlers::healthcheck))
        .route("/openapi.json", get(docs::handlers::openapi))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
