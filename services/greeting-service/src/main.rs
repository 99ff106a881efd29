//! Static greeting service
//!
//! Stateless HTTP service on port 9000. Every request, regardless of
//! method, path, headers, or query parameters, receives the fixed greeting
//! with status 200.

use axum::{routing::any, Router};
use usersvc_core::prelude::*;

const GREETING: &str = "Hello from the Go HTTP server!";

async fn greet() -> &'static str {
    GREETING
}

/// Catch-all router: the root route and every other path serve the greeting
fn router() -> Router {
    Router::new().route("/", any(greet)).fallback(greet)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load("greeting-service")?;
    init_tracing(&config)?;

    Server::new(config).serve(router()).await?;

    Ok(())
}
