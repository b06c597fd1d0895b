//! Integration tests for the version ledger.
//!
//! Pins the snapshot semantics the store guarantees:
//! - Creation records exactly one version with tag 1, equal to the
//!   persisted row
//! - Edits and transitions append *pre-mutation* snapshots under
//!   epoch-millis tags
//! - Listing is newest-first; unknown ids yield an empty list
//! - `delete_all_for` empties a content's history

use pressroom_core::workflow::ContentStatus;
use pressroom_db::models::content::{ContentEdit, CreateContent};
use pressroom_db::repositories::{ContentRepo, ContentVersionRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ACTOR: &str = "admin@example.com";

/// Any tag from the epoch-millis scheme is far above the initial tag.
const MILLIS_TAG_FLOOR: i64 = 1_000_000_000_000;

fn new_content(title: &str) -> CreateContent {
    CreateContent {
        title: title.to_string(),
        summary: "summary".to_string(),
        date: "2026-03-31".to_string(),
        category: "Performance".to_string(),
        subcategory: String::new(),
        status: ContentStatus::Draft,
        attachments: Vec::new(),
        created_by: ACTOR.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Creation snapshot
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn creation_snapshot_equals_the_created_entity(pool: PgPool) {
    let created = ContentRepo::create(&pool, &new_content("Q1 Report"))
        .await
        .unwrap();

    let versions = ContentVersionRepo::list_for_content(&pool, created.id)
        .await
        .unwrap();
    assert_eq!(versions.len(), 1);

    let version = &versions[0];
    assert_eq!(version.version, 1);
    assert_eq!(version.content_id, created.id);

    let snapshot = &version.snapshot;
    assert_eq!(snapshot["id"], serde_json::json!(created.id));
    assert_eq!(snapshot["title"], "Q1 Report");
    assert_eq!(snapshot["summary"], "summary");
    assert_eq!(snapshot["category"], "Performance");
    assert_eq!(snapshot["status"], "Draft");
    assert_eq!(snapshot["created_by"], ACTOR);
    assert_eq!(snapshot["attachments"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Pre-mutation snapshots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn edit_appends_a_pre_edit_snapshot(pool: PgPool) {
    let created = ContentRepo::create(&pool, &new_content("Before"))
        .await
        .unwrap();

    let edit = ContentEdit {
        title: "After".to_string(),
        summary: String::new(),
        date: String::new(),
    };
    ContentRepo::update_meta(&pool, created.id, &edit, None, ACTOR)
        .await
        .unwrap()
        .expect("content exists");

    let versions = ContentVersionRepo::list_for_content(&pool, created.id)
        .await
        .unwrap();
    assert_eq!(versions.len(), 2);

    // Newest first: the edit snapshot must show the state *before* the
    // edit, not the state being written.
    let edit_version = &versions[0];
    assert_eq!(edit_version.snapshot["title"], "Before");
    assert!(edit_version.version >= MILLIS_TAG_FLOOR);

    assert_eq!(versions[1].version, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn transition_appends_a_pre_transition_snapshot(pool: PgPool) {
    let created = ContentRepo::create(&pool, &new_content("Q1 Report"))
        .await
        .unwrap();

    ContentRepo::set_status(&pool, created.id, ContentStatus::Published, ACTOR)
        .await
        .unwrap()
        .expect("content exists");

    let versions = ContentVersionRepo::list_for_content(&pool, created.id)
        .await
        .unwrap();
    assert_eq!(versions.len(), 2);

    // The item is Published now, but the snapshot captured Draft.
    assert_eq!(versions[0].snapshot["status"], "Draft");
    assert!(versions[0].version >= MILLIS_TAG_FLOOR);
}

#[sqlx::test(migrations = "./migrations")]
async fn every_mutation_appends_one_record(pool: PgPool) {
    let created = ContentRepo::create(&pool, &new_content("Busy item"))
        .await
        .unwrap();

    ContentRepo::set_status(&pool, created.id, ContentStatus::InReview, ACTOR)
        .await
        .unwrap();
    ContentRepo::set_status(&pool, created.id, ContentStatus::Approved, ACTOR)
        .await
        .unwrap();
    let edit = ContentEdit {
        title: "Busy item, edited".to_string(),
        summary: String::new(),
        date: String::new(),
    };
    ContentRepo::update_meta(&pool, created.id, &edit, None, ACTOR)
        .await
        .unwrap();

    let versions = ContentVersionRepo::list_for_content(&pool, created.id)
        .await
        .unwrap();
    assert_eq!(versions.len(), 4);

    // Newest-first ordering walks the history backwards.
    assert_eq!(versions[0].snapshot["status"], "Approved");
    assert_eq!(versions[1].snapshot["status"], "In Review");
    assert_eq!(versions[2].snapshot["status"], "Draft");
    assert_eq!(versions[3].version, 1);
}

// ---------------------------------------------------------------------------
// Ledger bookkeeping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn unknown_content_id_yields_an_empty_list(pool: PgPool) {
    let versions = ContentVersionRepo::list_for_content(&pool, 424_242)
        .await
        .unwrap();
    assert!(versions.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn record_snapshot_reports_missing_content(pool: PgPool) {
    let recorded = ContentVersionRepo::record_snapshot(&pool, 424_242, 1, ACTOR)
        .await
        .unwrap();
    assert!(!recorded);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_all_for_empties_the_history(pool: PgPool) {
    let created = ContentRepo::create(&pool, &new_content("Short-lived"))
        .await
        .unwrap();
    ContentRepo::set_status(&pool, created.id, ContentStatus::Published, ACTOR)
        .await
        .unwrap();

    let removed = ContentVersionRepo::delete_all_for(&pool, created.id)
        .await
        .unwrap();
    assert_eq!(removed, 2);

    assert!(ContentVersionRepo::list_for_content(&pool, created.id)
        .await
        .unwrap()
        .is_empty());
}
