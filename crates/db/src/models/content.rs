//! Content entity model and DTOs.

use pressroom_core::types::{DbId, Timestamp};
use pressroom_core::workflow::ContentStatus;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An uploaded file associated with a content item.
///
/// `path` is a storage key rooted at the uploads directory (for example
/// `files/1700000000000-report.pdf`); the HTTP layer serves the same key
/// under the fixed public prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub path: String,
}

/// A row from the `contents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Content {
    pub id: DbId,
    pub title: String,
    pub summary: String,
    /// Free-form display date; deliberately unvalidated.
    pub date: String,
    pub category: String,
    pub subcategory: String,
    #[sqlx(try_from = "String")]
    pub status: ContentStatus,
    /// Ordered as submitted; fully replaced, never partially edited.
    #[sqlx(json)]
    pub attachments: Vec<Attachment>,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new content item.
#[derive(Debug, Clone)]
pub struct CreateContent {
    pub title: String,
    pub summary: String,
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub status: ContentStatus,
    pub attachments: Vec<Attachment>,
    pub created_by: String,
}

/// Metadata fields replaced by an edit.
///
/// Category, subcategory and status are never touched by an edit --
/// workflow transitions own the status.
#[derive(Debug, Clone, Default)]
pub struct ContentEdit {
    pub title: String,
    pub summary: String,
    pub date: String,
}

/// Filter parameters for content listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentQuery {
    /// Exact category match.
    pub category: Option<String>,
    /// Exact subcategory match.
    pub subcategory: Option<String>,
    /// Case-insensitive substring match against the title.
    pub q: Option<String>,
}
