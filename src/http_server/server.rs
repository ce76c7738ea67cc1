//! # HTTP Server
//!
//! Combines the service, product and documentation routers into one Axum
//! application.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::observability_routes::service_routes;
use super::openapi::{docs_routes, DOCS_UI_PATH, OPENAPI_PATH};
use super::product_routes::{product_routes, CatalogState};
use crate::catalog::ProductStore;

/// HTTP server for the product catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around an already-opened product store
    pub fn new(config: HttpServerConfig, store: Arc<dyn ProductStore>) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(%addr, "product catalog listening");
        info!(docs = DOCS_UI_PATH, spec = OPENAPI_PATH, "interface description available");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, store: Arc<dyn ProductStore>) -> Router {
    let catalog_state = Arc::new(CatalogState::new(store));

    Router::new()
        .merge(service_routes())
        .merge(product_routes(catalog_state))
        .merge(docs_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_origins)),
        )
}

/// Permissive when no origins are configured, otherwise an allow-list
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<_> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SqlProductStore;

    async fn store() -> Arc<dyn ProductStore> {
        Arc::new(SqlProductStore::in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), store().await);
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[tokio::test]
    async fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::new(config, store().await);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string(), "\n".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, store().await).router();
    }
}
