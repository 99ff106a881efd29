//! HTTP server

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::Config, error::Result};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the server with the given router
    ///
    /// Binds the listener and serves until the process exits. Handlers run
    /// one task per request; there is no draining on shutdown.
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.service.port));

        let app = app.layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("{} listening on {}", self.config.service.name, addr);

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
