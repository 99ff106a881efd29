//! Database connection pool management

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{config::DatabaseConfig, error::Result};

/// Create the PostgreSQL connection pool and verify reachability
///
/// Built exactly once by the service's composition root and shared by
/// handlers from there; `PgPool` is internally reference-counted and safe
/// for concurrent use. A single connection attempt is made (no retry
/// policy), followed by one liveness round-trip. Any failure is returned
/// to the caller, which exits before binding the listener.
///
/// Idle connections are bounded by `max_connections`; each physical
/// connection is recycled after `max_lifetime_secs` regardless of use.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url())
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to connect to database at '{}': {}",
                config.sanitized_url(),
                e
            );
            e
        })?;

    // Liveness check: one no-op round trip before the service starts serving
    sqlx::query("SELECT 1").execute(&pool).await.map_err(|e| {
        tracing::error!(
            "Database at '{}' is unreachable: {}",
            config.sanitized_url(),
            e
        );
        e
    })?;

    tracing::info!(
        "Database connection pool initialized: max={}, lifetime={}s",
        config.max_connections,
        config.max_lifetime_secs
    );

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_knob_defaults_match_policy() {
        let config = DatabaseConfig {
            user: "app".to_string(),
            password: "pass".to_string(),
            db: "appdb".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            max_connections: 25,
            max_lifetime_secs: 300,
        };

        assert_eq!(config.max_connections, 25);
        assert_eq!(Duration::from_secs(config.max_lifetime_secs), Duration::from_secs(300));
    }
}
