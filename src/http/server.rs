//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the relay route
//! - Wire up middleware (tracing)
//! - Serve connections with graceful shutdown

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::relay::relay_handler;
use crate::upstream;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared outbound client; cloning is cheap (internal Arc).
    pub client: reqwest::Client,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let state = AppState {
            client: upstream::build_client()?,
        };

        let router = Router::new()
            .route("/proxy", get(relay_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Ok(Self { router, config })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
