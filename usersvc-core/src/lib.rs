//! # usersvc-core
//!
//! Shared plumbing for the usersvc workspace: configuration loading,
//! the error type, tracing initialization, PostgreSQL pool construction,
//! and the HTTP server wrapper.
//!
//! Each service binary composes these pieces at its entry point:
//!
//! ```rust,no_run
//! use usersvc_core::prelude::*;
//! use axum::{routing::get, Router};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load("my-service")?;
//!     init_tracing(&config)?;
//!
//!     let app = Router::new().route("/", get(|| async { "ok" }));
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod observability;
pub mod server;

/// Convenience re-exports for service binaries
pub mod prelude {
    pub use crate::config::{Config, DatabaseConfig, ServiceConfig};
    pub use crate::database::create_pool;
    pub use crate::error::{Error, Result};
    pub use crate::observability::init_tracing;
    pub use crate::server::Server;
}
