//! In-process document store
//!
//! Used when no database is configured and throughout the test suite.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    db::store::DocumentStore,
    error::StoreResult,
    models::{apply_fields, with_id, Document, Filter, FilterExt, UpdateResult},
};

struct StoredDocument {
    id: Uuid,
    fields: Document,
}

/// Collections kept in insertion order behind one lock
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        Ok(documents
            .iter()
            .filter(|stored| filter.matches(&stored.fields))
            .skip(skip)
            .take(limit)
            .map(|stored| with_id(stored.id, &stored.fields))
            .collect())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|stored| stored.id == id))
            .map(|stored| with_id(stored.id, &stored.fields)))
    }

    async fn insert(&self, collection: &str, id: Uuid, fields: Document) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, fields });
        Ok(())
    }

    async fn set_fields(
        &self,
        collection: &str,
        id: Uuid,
        fields: Document,
        upsert: bool,
    ) -> StoreResult<UpdateResult> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if let Some(stored) = documents.iter_mut().find(|stored| stored.id == id) {
            let modified = apply_fields(&mut stored.fields, fields);
            return Ok(UpdateResult::matched(modified));
        }

        if !upsert {
            return Ok(UpdateResult::unmatched());
        }

        let mut created = Document::new();
        apply_fields(&mut created, fields);
        documents.push(StoredDocument { id, fields: created });
        Ok(UpdateResult::upserted(id))
    }

    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match documents.iter().position(|stored| stored.id == id) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let collections = self.collections.read().await;
        let count = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|stored| filter.matches(&stored.fields))
                    .count()
            })
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryStore::new();
        store
            .insert("assignments", Uuid::new_v4(), doc(json!({ "title": "Essay" })))
            .await
            .unwrap();

        assert_eq!(store.count("assignments", &Filter::new()).await.unwrap(), 1);
        assert_eq!(store.count("submissions", &Filter::new()).await.unwrap(), 0);
        assert!(store
            .find("submissions", &Filter::new(), 0, None)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_find_keeps_insertion_order() {
        let store = MemoryStore::new();
        for n in 0..5 {
            store
                .insert("assignments", Uuid::new_v4(), doc(json!({ "n": n })))
                .await
                .unwrap();
        }

        let page = store
            .find("assignments", &Filter::new(), 1, Some(3))
            .await
            .unwrap();
        let numbers: Vec<_> = page.iter().map(|d| d["n"].as_i64().unwrap()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_set_fields_without_upsert_leaves_store_untouched() {
        let store = MemoryStore::new();
        let result = store
            .set_fields("submissions", Uuid::new_v4(), doc(json!({ "status": "done" })), false)
            .await
            .unwrap();

        assert_eq!(result, UpdateResult::unmatched());
        assert_eq!(store.count("submissions", &Filter::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_upsert_creates_under_requested_id() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();

        let result = store
            .set_fields("assignments", id, doc(json!({ "title": "Lab" })), true)
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::upserted(id));

        let found = store.find_by_id("assignments", id).await.unwrap().unwrap();
        assert_eq!(found["_id"], id.to_string());
        assert_eq!(found["title"], "Lab");
    }

    #[tokio::test]
    async fn test_delete_missing_document() {
        let store = MemoryStore::new();
        assert_eq!(store.delete("assignments", Uuid::new_v4()).await.unwrap(), 0);
    }
}
