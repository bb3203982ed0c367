//! HTTP server.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::http::routes::create_router;
use crate::state::AppContext;

/// Listener and CORS configuration.
#[derive(Debug, Clone)]
pub struct InterfaceConfig {
    pub host: String,
    pub port: u16,
    /// The only origin allowed by CORS.
    pub allowed_origin: String,
}

impl InterfaceConfig {
    pub fn new(host: impl Into<String>, port: u16, allowed_origin: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            allowed_origin: allowed_origin.into(),
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

/// CORS for a single credentialed origin. Other origins get no allow-origin header.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([HeaderValue::from_str(origin)?]))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

pub struct InterfaceServer {
    config: InterfaceConfig,
    ctx: Arc<AppContext>,
}

impl InterfaceServer {
    pub fn new(config: InterfaceConfig, ctx: Arc<AppContext>) -> Self {
        Self { config, ctx }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Router with the CORS and trace layers applied.
    pub fn app(&self) -> Result<Router, InvalidHeaderValue> {
        Ok(create_router(self.ctx.clone())
            .layer(cors_layer(&self.config.allowed_origin)?)
            .layer(TraceLayer::new_for_http()))
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.app()?;

        let addr: SocketAddr = self.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!("refrelay listening on {}", addr);
        info!("CORS origin: {}", self.config.allowed_origin);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}
