//! Connection pool construction for the Postgres adapters.

use pillars_core::{AppError, AppResult};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Connects a pool to the host datastore. The schema is host-owned; no
/// migrations run here.
pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    info!(max_connections = max_connections, "connected to host datastore");
    Ok(pool)
}
