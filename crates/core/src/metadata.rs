//! Whitelisted metadata patch parsed from the multipart `meta` field.

use serde::Deserialize;

use crate::workflow::ContentStatus;

/// Client-supplied metadata for create and update operations.
///
/// A fixed field whitelist: unknown JSON keys are ignored rather than
/// spread onto the entity. Every field is optional; absent fields fall
/// back to the schema defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentMeta {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub status: Option<ContentStatus>,
}

impl ContentMeta {
    /// Parse the raw `meta` form field.
    ///
    /// Malformed metadata is tolerated, not rejected: anything that fails
    /// to parse degrades to an empty patch.
    pub fn from_json_lenient(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields() {
        let meta = ContentMeta::from_json_lenient(
            r#"{"title": "Q1 Report", "category": "Performance", "status": "Published"}"#,
        );
        assert_eq!(meta.title.as_deref(), Some("Q1 Report"));
        assert_eq!(meta.category.as_deref(), Some("Performance"));
        assert_eq!(meta.status, Some(ContentStatus::Published));
        assert_eq!(meta.summary, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let meta = ContentMeta::from_json_lenient(r#"{"title": "x", "is_admin": true}"#);
        assert_eq!(meta.title.as_deref(), Some("x"));
    }

    #[test]
    fn malformed_json_degrades_to_empty_patch() {
        assert_eq!(ContentMeta::from_json_lenient("{not json"), ContentMeta::default());
        assert_eq!(ContentMeta::from_json_lenient(""), ContentMeta::default());
    }

    #[test]
    fn invalid_status_value_degrades_to_empty_patch() {
        // The whole document fails to deserialize, so nothing is applied.
        let meta = ContentMeta::from_json_lenient(r#"{"title": "x", "status": "Archived"}"#);
        assert_eq!(meta, ContentMeta::default());
    }
}
