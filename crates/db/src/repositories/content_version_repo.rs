//! Repository for the `content_versions` ledger table.

use pressroom_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::content_version::ContentVersion;

/// Column list shared across queries.
const COLUMNS: &str = "id, content_id, version, created_by, snapshot, created_at";

/// Append-only ledger of full content snapshots.
pub struct ContentVersionRepo;

impl ContentVersionRepo {
    /// Append a snapshot of the current `contents` row.
    ///
    /// The row image is captured server-side with `to_jsonb`, so the
    /// record reflects exactly what is persisted at the moment of the
    /// call. Returns `false` when no content row with the given id
    /// exists -- inside the store's transactions this doubles as the
    /// existence check.
    pub async fn record_snapshot<'e>(
        executor: impl PgExecutor<'e>,
        content_id: DbId,
        version: i64,
        created_by: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO content_versions (content_id, version, created_by, snapshot) \
             SELECT c.id, $2, $3, to_jsonb(c) FROM contents c WHERE c.id = $1",
        )
        .bind(content_id)
        .bind(version)
        .bind(created_by)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all versions for a content id, newest first.
    ///
    /// An id with no versions (including one that never existed) yields
    /// an empty list.
    pub async fn list_for_content(
        pool: &PgPool,
        content_id: DbId,
    ) -> Result<Vec<ContentVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_versions \
             WHERE content_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContentVersion>(&query)
            .bind(content_id)
            .fetch_all(pool)
            .await
    }

    /// Delete every version for a content id. Returns the number removed.
    ///
    /// Used by the content store's delete operation; exposed on an
    /// executor so it can run inside that operation's transaction.
    pub async fn delete_all_for<'e>(
        executor: impl PgExecutor<'e>,
        content_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM content_versions WHERE content_id = $1")
            .bind(content_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
