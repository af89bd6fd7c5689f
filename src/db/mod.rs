//! Database module
//!
//! The document store abstraction, its PostgreSQL and in-memory backends,
//! and the per-collection accessor handlers are built on.

pub mod collection;
pub mod connection;
pub mod memory;
pub mod postgres;
pub mod store;

use sqlx::PgPool;

pub use collection::{parse_id, Collection};
pub use connection::*;
pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;
pub use store::DocumentStore;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
