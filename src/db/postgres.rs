//! PostgreSQL-backed document store
//!
//! Every collection shares the `documents` table. Bodies are JSONB without
//! the identifier; `seq` gives the default listing order and filters are
//! JSON containment on the body.

use async_trait::async_trait;
use sqlx::{types::Json, FromRow, PgPool};
use uuid::Uuid;

use crate::{
    db::store::DocumentStore,
    error::StoreResult,
    models::{apply_fields, with_id, Document, Filter, UpdateResult},
};

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Document>,
}

impl DocumentRow {
    fn into_document(self) -> Document {
        with_id(self.id, &self.body.0)
    }
}

/// Document store over a PostgreSQL pool
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        // LIMIT NULL means no limit
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(collection)
        .bind(Json(filter))
        .bind(to_i64(skip))
        .bind(limit.map(to_i64))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DocumentRow::into_document).collect())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"SELECT id, body FROM documents WHERE collection = $1 AND id = $2"#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DocumentRow::into_document))
    }

    async fn insert(&self, collection: &str, id: Uuid, fields: Document) -> StoreResult<()> {
        sqlx::query(r#"INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)"#)
            .bind(collection)
            .bind(id)
            .bind(Json(&fields))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn set_fields(
        &self,
        collection: &str,
        id: Uuid,
        fields: Document,
        upsert: bool,
    ) -> StoreResult<UpdateResult> {
        let mut tx = self.pool.begin().await?;

        // Concurrent upserts of one id converge on a single row
        let created = if upsert {
            sqlx::query(
                r#"INSERT INTO documents (collection, id, body) VALUES ($1, $2, '{}'::jsonb)
                   ON CONFLICT (collection, id) DO NOTHING"#,
            )
            .bind(collection)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
                > 0
        } else {
            false
        };

        let existing = sqlx::query_scalar::<_, Json<Document>>(
            r#"SELECT body FROM documents WHERE collection = $1 AND id = $2 FOR UPDATE"#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let result = match existing {
            Some(Json(mut body)) => {
                let modified = apply_fields(&mut body, fields);
                if modified || created {
                    sqlx::query(
                        r#"UPDATE documents SET body = $3 WHERE collection = $1 AND id = $2"#,
                    )
                    .bind(collection)
                    .bind(id)
                    .bind(Json(&body))
                    .execute(&mut *tx)
                    .await?;
                }
                if created {
                    UpdateResult::upserted(id)
                } else {
                    UpdateResult::matched(modified)
                }
            }
            None => UpdateResult::unmatched(),
        };

        tx.commit().await?;
        Ok(result)
    }

    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query(r#"DELETE FROM documents WHERE collection = $1 AND id = $2"#)
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM documents WHERE collection = $1 AND body @> $2"#,
        )
        .bind(collection)
        .bind(Json(filter))
        .fetch_one(&self.pool)
        .await?;

        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
