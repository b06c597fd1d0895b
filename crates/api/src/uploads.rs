//! Filesystem storage for uploaded attachment files.

use std::path::{Path, PathBuf};

use pressroom_core::storage;
use pressroom_db::models::content::Attachment;

/// Physical location of a stored object key below the uploads root.
pub fn physical_path(root: &Path, key: &str) -> PathBuf {
    root.join(key)
}

/// Persist one uploaded file and return its attachment record.
///
/// The storage key is fixed here, at write time
/// (`files/<epoch-millis>-<name>`); nothing downstream ever rewrites it
/// to locate the file.
pub async fn store_upload(
    root: &Path,
    original_name: &str,
    data: &[u8],
) -> std::io::Result<Attachment> {
    let key = storage::object_key(chrono::Utc::now(), original_name);
    let path = physical_path(root, &key);

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, data).await?;

    Ok(Attachment {
        name: original_name.to_string(),
        path: key,
    })
}

/// Best-effort removal of a stored file.
///
/// A missing file is not an error; any other failure is logged and
/// swallowed so record cleanup can proceed.
pub async fn remove_stored(root: &Path, key: &str) {
    let path = physical_path(root, key);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(key, error = %err, "Failed to delete stored attachment file");
        }
    }
}
