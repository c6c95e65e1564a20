use axum::Json;
use utoipa::OpenApi;

use crate::doc::ApiDoc;

/// Serves the generated OpenAPI document
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
