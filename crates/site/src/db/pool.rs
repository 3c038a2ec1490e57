//! Postgres pool setup.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::AppResult;

pub type DbPool = PgPool;

/// Connect to the configured database.
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(config.connect_options())
        .await?;

    tracing::info!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "Connected to content database"
    );

    Ok(pool)
}

/// `SELECT 1` round trip.
pub async fn ping(pool: &DbPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}
