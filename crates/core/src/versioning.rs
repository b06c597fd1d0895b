//! Version-tag policy for the content version ledger.

use crate::types::Timestamp;

/// Tag recorded for the snapshot taken when a content item is created.
pub const INITIAL_VERSION: i64 = 1;

/// Tag for any later mutation: epoch milliseconds at record time.
///
/// Tags grow with wall-clock time but are not sequential, and two
/// mutations within the same millisecond can collide. Ledger ordering is
/// defined by record creation time, never by tag.
pub fn mutation_version_tag(now: Timestamp) -> i64 {
    now.timestamp_millis()
}
