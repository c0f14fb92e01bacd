//! Database migrations

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

/// Run pending database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Migrations complete");
    Ok(())
}
