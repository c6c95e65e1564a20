use axum::http::StatusCode;

/// Body returned by `GET /sample`
pub const SAMPLE_RESPONSE: &str = "Sample response";

/// Returns a fixed sample string, ignoring any query, headers or body
#[utoipa::path(
    get,
    path = "/sample",
    responses(
        (status = 200, description = "Fixed sample response", content_type = "text/plain", body = String)
    ),
    tag = "Sample"
)]
pub async fn sample() -> (StatusCode, &'static str) {
    (StatusCode::OK, SAMPLE_RESPONSE)
}
