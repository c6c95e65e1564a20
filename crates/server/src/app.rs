use axum::{Router, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::{
    middleware::logging::log_request,
    routes::{health::health, openapi::openapi, sample::sample},
};

/// Builds the application router with every route and layer registered
pub fn router() -> Router {
    Router::new()
        .route("/sample", get(sample))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_request))
                .layer(CompressionLayer::new()),
        )
}
