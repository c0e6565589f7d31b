//! # HTTP Server
//!
//! Server shell around the CRUD router: CORS, liveness route, bind and
//! serve.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::graph::GraphStore;
use crate::observability::Logger;

use super::routes;

/// HTTP server for the graph facade
pub struct HttpServer {
    config: Config,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given configuration and store handle
    pub fn with_config(config: Config, store: Arc<dyn GraphStore>) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router: CRUD routes, liveness probe, permissive CORS
    fn build_router(store: Arc<dyn GraphStore>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::router(store)
            .route("/health", get(health_handler))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        let listener = TcpListener::bind(addr).await?;
        Logger::info("HTTP_SERVER_ONLINE", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MemoryGraphStore;

    fn test_server(config: Config) -> HttpServer {
        HttpServer::with_config(config, Arc::new(MemoryGraphStore::new()))
    }

    #[test]
    fn test_server_default_addr() {
        let server = test_server(Config::default());
        assert_eq!(server.socket_addr(), "0.0.0.0:4000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = test_server(Config::default().with_port(8080));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = test_server(Config::default());
        let _router = server.router();
    }
}
