//! Naming scheme for stored upload files.
//!
//! An attachment's `path` is a storage key rooted at the uploads
//! directory (e.g. `files/1700000000000-report.pdf`). The physical file
//! lives at `<uploads_dir>/<key>`; the HTTP layer serves the same key
//! under [`PUBLIC_PREFIX`]. The key is fixed at write time, so locating
//! a file never requires rewriting the stored path.

use crate::types::Timestamp;

/// Public URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Key prefix (subdirectory of the uploads root) for attachment files.
pub const FILES_DIR: &str = "files";

/// Reduce an uploaded filename to a safe basename.
///
/// Directory components are stripped and anything outside
/// `[A-Za-z0-9._-]` becomes `_`, so a hostile filename cannot escape the
/// uploads root.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// Storage key for a newly uploaded file: `files/<epoch-millis>-<name>`.
///
/// The time prefix makes collisions require two identically named
/// uploads within the same millisecond -- an accepted risk.
pub fn object_key(now: Timestamp, original_name: &str) -> String {
    format!(
        "{FILES_DIR}/{}-{}",
        now.timestamp_millis(),
        sanitize_filename(original_name)
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn object_key_is_time_prefixed() {
        let now = chrono::Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(
            object_key(now, "report.pdf"),
            "files/1700000000000-report.pdf"
        );
    }

    #[test]
    fn sanitize_strips_directory_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\evil.exe"), "evil.exe");
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("q1 report (final).pdf"), "q1_report__final_.pdf");
    }

    #[test]
    fn sanitize_never_returns_an_empty_name() {
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("dir/"), "upload");
    }
}
