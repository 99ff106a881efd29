//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize structured logging for a service
///
/// Uses JSON formatting with an env-filter derived from the configured log
/// level. Safe to call more than once; subsequent calls are no-ops.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = config.service.log_level.clone();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .ok();

    tracing::info!("Tracing initialized for service: {}", config.service.name);

    Ok(())
}
