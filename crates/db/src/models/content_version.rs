//! Version ledger entity model.

use pressroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `content_versions` table. Immutable once created.
///
/// `version` is 1 for the snapshot taken at creation and an epoch-millis
/// tag for every later mutation. Tags are not sequential; the listing
/// order is defined by `created_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentVersion {
    pub id: DbId,
    pub content_id: DbId,
    pub version: i64,
    pub created_by: String,
    /// Full row image of the content at the moment the record was taken.
    pub snapshot: serde_json::Value,
    pub created_at: Timestamp,
}
