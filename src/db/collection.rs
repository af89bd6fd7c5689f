//! Per-collection accessor
//!
//! One `Collection` exists per entity kind. It owns identifier parsing and
//! assignment so backends only ever see valid UUIDs.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    constants::ID_FIELD,
    db::store::DocumentStore,
    error::{StoreError, StoreResult},
    models::{DeleteResult, Document, Filter, InsertOneResult, UpdateResult},
};

/// Parse a path identifier
pub fn parse_id(raw: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| StoreError::MalformedId(raw.to_string()))
}

/// Accessor for one named collection
#[derive(Clone)]
pub struct Collection {
    store: Arc<dyn DocumentStore>,
    name: &'static str,
}

impl Collection {
    pub fn new(store: Arc<dyn DocumentStore>, name: &'static str) -> Self {
        Self { store, name }
    }

    /// All documents matching `filter`
    pub async fn find_all(&self, filter: &Filter) -> StoreResult<Vec<Document>> {
        self.store.find(self.name, filter, 0, None).await
    }

    pub async fn find_one(&self, id: &str) -> StoreResult<Document> {
        let id = parse_id(id)?;
        self.store
            .find_by_id(self.name, id)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Store `document` under a fresh identifier.
    ///
    /// A client-supplied `_id` is discarded.
    pub async fn insert_one(&self, mut document: Document) -> StoreResult<InsertOneResult> {
        document.remove(ID_FIELD);
        let id = Uuid::new_v4();

        self.store.insert(self.name, id, document).await?;
        tracing::debug!(collection = self.name, id = %id, "Inserted document");

        Ok(InsertOneResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    pub async fn update_one(
        &self,
        id: &str,
        fields: Document,
        upsert: bool,
    ) -> StoreResult<UpdateResult> {
        let id = parse_id(id)?;
        let result = self.store.set_fields(self.name, id, fields, upsert).await?;
        tracing::debug!(
            collection = self.name,
            id = %id,
            matched = result.matched_count,
            modified = result.modified_count,
            upserted = result.upserted_count,
            "Updated document"
        );
        Ok(result)
    }

    pub async fn delete_one(&self, id: &str) -> StoreResult<DeleteResult> {
        let id = parse_id(id)?;
        let deleted_count = self.store.delete(self.name, id).await?;
        Ok(DeleteResult {
            acknowledged: true,
            deleted_count,
        })
    }

    pub async fn count_documents(&self, filter: &Filter) -> StoreResult<u64> {
        self.store.count(self.name, filter).await
    }

    /// Matching documents after skipping `skip`, at most `limit` of them
    pub async fn find_page(
        &self,
        filter: &Filter,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        self.store.find(self.name, filter, skip, limit).await
    }
}
