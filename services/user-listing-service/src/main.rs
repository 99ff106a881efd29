//! User-listing service
//!
//! HTTP service on port 9000 that renders the `users` table as plain text.
//! Startup is fail-fast: missing configuration or an unreachable database
//! terminates the process before the listener binds.

use user_listing_service::{router, AppState};
use usersvc_core::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_with_database("user-listing-service")?;
    init_tracing(&config)?;

    let db_config = config
        .database
        .clone()
        .ok_or_else(|| anyhow::anyhow!("database configuration missing"))?;
    let pool = create_pool(&db_config).await?;

    let state = AppState { db: pool };

    Server::new(config).serve(router(state)).await?;

    Ok(())
}
