use crate::logging::consts::{DEFAULT_CLIENT_IP, FORWARDED_FOR_HEADER};
use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderMap;
use std::time::Instant;

pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = client_ip(request.headers()).to_string();

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed().as_micros();

    tracing::info!(
        task = "http_request",
        http_method = %method,
        endpoint = %path,
        client_ip = %client_ip,
        status = response.status().as_u16(),
        processing_time_us = elapsed_time as u64,
    );

    response
}

/// First hop of `X-Forwarded-For`, which is the originating client.
pub fn client_ip(headers: &HeaderMap) -> &str {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_CLIENT_IP)
}
