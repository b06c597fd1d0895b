//! Repository for the `contents` table -- the content store.
//!
//! Every mutation records a version snapshot in the same transaction:
//! creation snapshots the freshly persisted row under tag 1; edits and
//! workflow transitions snapshot the *pre-mutation* state under an
//! epoch-millis tag before applying the change.

use pressroom_core::types::DbId;
use pressroom_core::versioning::{mutation_version_tag, INITIAL_VERSION};
use pressroom_core::workflow::ContentStatus;
use sqlx::PgPool;

use crate::models::content::{Attachment, Content, ContentEdit, ContentQuery, CreateContent};
use crate::repositories::content_version_repo::ContentVersionRepo;

/// Column list shared across queries.
const COLUMNS: &str = "id, title, summary, date, category, subcategory, status, \
    attachments, created_by, created_at, updated_at";

/// Shared filter clause: exact category/subcategory match plus a
/// case-insensitive substring match on the title. NULL parameters (and,
/// via [`normalize`], empty strings) behave as absent filters.
const FILTER: &str = "($1::text IS NULL OR category = $1) \
    AND ($2::text IS NULL OR subcategory = $2) \
    AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%')";

/// Listings are newest-first; ids break creation-time ties.
const ORDERING: &str = "ORDER BY created_at DESC, id DESC";

/// Treat empty-string query parameters like absent ones.
fn normalize(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

/// CRUD, workflow, and listing operations for content items.
pub struct ContentRepo;

impl ContentRepo {
    /// List content matching the filter, all statuses. No pagination.
    pub async fn search(pool: &PgPool, params: &ContentQuery) -> Result<Vec<Content>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents WHERE {FILTER} {ORDERING}");
        sqlx::query_as::<_, Content>(&query)
            .bind(normalize(&params.category))
            .bind(normalize(&params.subcategory))
            .bind(normalize(&params.q))
            .fetch_all(pool)
            .await
    }

    /// List content matching the filter, restricted to `Published`.
    pub async fn search_published(
        pool: &PgPool,
        params: &ContentQuery,
    ) -> Result<Vec<Content>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contents \
             WHERE status = 'Published' AND {FILTER} {ORDERING}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(normalize(&params.category))
            .bind(normalize(&params.subcategory))
            .bind(normalize(&params.q))
            .fetch_all(pool)
            .await
    }

    /// Find a content item by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Content>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents WHERE id = $1");
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new content item and record its version-1 snapshot.
    ///
    /// Both writes share one transaction, so a created item always has
    /// exactly one initial version equal to the persisted row.
    pub async fn create(pool: &PgPool, input: &CreateContent) -> Result<Content, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO contents \
                (title, summary, date, category, subcategory, status, attachments, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let content = sqlx::query_as::<_, Content>(&query)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.date)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(input.status.as_str())
            .bind(sqlx::types::Json(&input.attachments))
            .bind(&input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        ContentVersionRepo::record_snapshot(
            &mut *tx,
            content.id,
            INITIAL_VERSION,
            &input.created_by,
        )
        .await?;

        tx.commit().await?;
        Ok(content)
    }

    /// Replace a content item's metadata, and optionally its attachments.
    ///
    /// Records a snapshot of the pre-edit state first, then overwrites
    /// title/summary/date. When `new_attachments` is `Some`, the
    /// attachment list is fully replaced (all-or-nothing); the superseded
    /// list is returned so the caller can delete the underlying files.
    /// Returns `None` when the id is unknown.
    pub async fn update_meta(
        pool: &PgPool,
        id: DbId,
        edit: &ContentEdit,
        new_attachments: Option<&[Attachment]>,
        actor: &str,
    ) -> Result<Option<(Content, Vec<Attachment>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM contents WHERE id = $1");
        let Some(current) = sqlx::query_as::<_, Content>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let tag = mutation_version_tag(chrono::Utc::now());
        ContentVersionRepo::record_snapshot(&mut *tx, id, tag, actor).await?;

        let update = format!(
            "UPDATE contents SET \
                title = $2, summary = $3, date = $4, \
                attachments = COALESCE($5, attachments), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Content>(&update)
            .bind(id)
            .bind(&edit.title)
            .bind(&edit.summary)
            .bind(&edit.date)
            .bind(new_attachments.map(sqlx::types::Json))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        let superseded = if new_attachments.is_some() {
            current.attachments
        } else {
            Vec::new()
        };
        Ok(Some((updated, superseded)))
    }

    /// Set a content item's status unconditionally.
    ///
    /// Records a pre-transition snapshot first; the snapshot's row count
    /// doubles as the existence check. There is no guard on the current
    /// status -- any target may be assigned from any state.
    /// Returns `None` when the id is unknown.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: ContentStatus,
        actor: &str,
    ) -> Result<Option<Content>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let tag = mutation_version_tag(chrono::Utc::now());
        if !ContentVersionRepo::record_snapshot(&mut *tx, id, tag, actor).await? {
            return Ok(None);
        }

        let query = format!(
            "UPDATE contents SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let content = sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(content))
    }

    /// Delete a content item and its whole version history.
    ///
    /// Versions go first; the content row deletion commits last, so no
    /// partial delete is ever observable as success. Returns `false`
    /// when the id is unknown.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        ContentVersionRepo::delete_all_for(&mut *tx, id).await?;

        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
