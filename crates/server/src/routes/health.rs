use axum::http::StatusCode;

/// Liveness body, naming the running build
pub const HEALTHY: &str = concat!(
    "OK ",
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Liveness probe; answers as long as the process can serve requests
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is serving, body names the running build", content_type = "text/plain", body = String, example = "OK sample-api/0.1.0")
    ),
    tag = "Health"
)]
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTHY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_names_build() {
        let (status, body) = health().await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("OK "));
        assert_eq!(body, format!("OK sample-api/{}", env!("CARGO_PKG_VERSION")));
    }
}
