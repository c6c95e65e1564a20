use axum::{extract::Request, middleware::Next, response::Response};
use log::info;
use std::time::Instant;

/// Logs method, URI, status and latency of every request
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    info!(
        "{method} {uri} -> {} ({} ms)",
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}
