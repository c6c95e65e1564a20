use crate::routes::{health, sample};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(sample::sample, health::health),
    tags(
        (name = "Sample", description = "Sample endpoints"),
        (name = "Health", description = "Liveness checks"),
    ),
    info(
        title = "Sample API",
        version = "1.0.0",
        description = "Sample REST API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/sample"));
        assert!(doc.paths.paths.contains_key("/health"));
        assert_eq!(doc.info.title, "Sample API");
    }
}
