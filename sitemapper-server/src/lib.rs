use anyhow::Result;
use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use std::{net::SocketAddr, sync::Arc};

use sitemapper_core::SitemapBuilder;

/// Path the sitemap is served under, matching the builder's own ignore list.
pub const SITEMAP_ROUTE: &str = "/sitemap.xml";

/// Configuration for the sitemap server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to serve on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Wrap the generated sitemap as an HTTP response. Always succeeds, even
/// when the route list is empty.
pub fn render(builder: &SitemapBuilder) -> Response {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        builder.generate(),
    )
        .into_response()
}

async fn sitemap_handler(State(builder): State<Arc<SitemapBuilder>>) -> Response {
    render(&builder)
}

/// Router serving `GET /sitemap.xml` from the given builder. Registration
/// must be finished before the builder goes behind the `Arc`.
pub fn router(builder: Arc<SitemapBuilder>) -> Router {
    Router::new()
        .route(SITEMAP_ROUTE, get(sitemap_handler))
        .with_state(builder)
}

/// Serves a site's sitemap over HTTP
pub struct SitemapServer {
    config: ServerConfig,
}

impl SitemapServer {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Run the server until interrupted
    pub async fn run(self, builder: SitemapBuilder) -> Result<()> {
        let route_count = builder.routes().len();
        let app = router(Arc::new(builder));

        // Build address
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        println!("Serving {} routes at http://{}{}", route_count, addr, SITEMAP_ROUTE);

        // Start server
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitemapper_core::RouteManifest;

    fn builder() -> SitemapBuilder {
        let mut manifest = RouteManifest::new();
        manifest.insert("./routes/index.tsx", json!("h1"));
        manifest.insert("./routes/about.tsx", json!("h2"));
        SitemapBuilder::new("https://example.com", manifest)
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_render_sets_content_type() {
        let response = render(&builder());

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml"
        );
    }

    #[tokio::test]
    async fn test_render_body_is_the_sitemap() {
        let response = render(&builder());
        let body = body_string(response).await;

        assert!(body.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(body.contains("<loc>https://example.com/</loc>"));
        assert!(body.contains("<loc>https://example.com/about</loc>"));
    }

    #[tokio::test]
    async fn test_render_empty_builder_still_succeeds() {
        let empty = SitemapBuilder::new("https://example.com", RouteManifest::new());
        let response = render(&empty);

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("</urlset>"));
        assert!(!body.contains("<url>"));
    }

    #[tokio::test]
    async fn test_handler_serves_the_sitemap() {
        let response = sitemap_handler(State(Arc::new(builder()))).await;

        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml"
        );
        let body = body_string(response).await;
        assert!(body.contains("<priority>1.0</priority>"));
    }
}
