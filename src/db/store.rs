//! Document store abstraction

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::StoreResult,
    models::{Document, Filter, UpdateResult},
};

/// Backend holding every collection's documents.
///
/// Returned documents always carry their identifier under `_id`; stored
/// bodies never do. Listings come back in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Matching documents, skipping `skip` and returning at most `limit`
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>>;

    async fn insert(&self, collection: &str, id: Uuid, fields: Document) -> StoreResult<()>;

    /// Overwrite the named top-level fields of document `id`.
    ///
    /// With `upsert`, a missing document is created from `fields` under `id`.
    async fn set_fields(
        &self,
        collection: &str,
        id: Uuid,
        fields: Document,
        upsert: bool,
    ) -> StoreResult<UpdateResult>;

    /// Number of documents removed (0 or 1)
    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<u64>;

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

    /// Round-trip to the backend
    async fn ping(&self) -> StoreResult<()>;
}
