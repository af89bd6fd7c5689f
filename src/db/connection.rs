//! Database connection management

use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    config::DatabaseConfig,
    db::{run_migrations, DocumentStore, MemoryStore, PgDocumentStore},
    error::StoreResult,
};

/// Create a new database connection pool
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Open the configured document store.
///
/// With a database URL this connects and migrates PostgreSQL; without one
/// it falls back to the in-memory store.
pub async fn connect_store(config: &DatabaseConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    let Some(url) = config.url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, using in-memory document store");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = create_pool(url, config.max_connections).await?;

    tracing::info!("Running database migrations...");
    run_migrations(&pool).await?;

    Ok(Arc::new(PgDocumentStore::new(pool)))
}
