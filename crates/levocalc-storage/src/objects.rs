//! Raw object operations on the store directory.
//!
//! Keys are `/`-separated paths relative to the store root.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

fn object_path(root: &Path, key: &str) -> PathBuf {
    key.split('/').fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Unique staging name next to `path`, so concurrent writers of one key never
/// share a temp file.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.tmp", uuid::Uuid::new_v4().simple()));
    path.with_file_name(name)
}

async fn ensure_parent(path: &Path, key: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StorageError::Write {
                key: key.to_string(),
                source,
            })?;
    }
    Ok(())
}

/// Read an object's bytes.
pub async fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = object_path(root, key);
    tokio::fs::read(&path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Read {
                key: key.to_string(),
                source,
            }
        }
    })
}

/// Write an object only if the key is free.
///
/// The body is staged in a temp file and hard-linked into place, so readers
/// never see a partial document and an existing object is never replaced.
pub async fn put_object_if_absent(
    root: &Path,
    key: &str,
    body: &[u8],
) -> Result<(), StorageError> {
    let path = object_path(root, key);
    ensure_parent(&path, key).await?;

    let tmp = temp_path(&path);
    tokio::fs::write(&tmp, body)
        .await
        .map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })?;

    let linked = tokio::fs::hard_link(&tmp, &path).await;
    if let Err(e) = tokio::fs::remove_file(&tmp).await {
        tracing::warn!(error = %e, path = %tmp.display(), "failed to remove staging file");
    }

    linked.map_err(|source| {
        if source.kind() == ErrorKind::AlreadyExists {
            StorageError::AlreadyExists {
                key: key.to_string(),
            }
        } else {
            StorageError::Write {
                key: key.to_string(),
                source,
            }
        }
    })
}

/// Delete an object. Missing objects are an error.
pub async fn delete_object(root: &Path, key: &str) -> Result<(), StorageError> {
    let path = object_path(root, key);
    tokio::fs::remove_file(&path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Delete {
                key: key.to_string(),
                source,
            }
        }
    })
}

/// List the keys of `.json` objects directly under `prefix`.
///
/// A prefix that has never been written to lists as empty.
pub async fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir = object_path(root, prefix.trim_end_matches('/'));
    let list_err = |source| StorageError::List {
        prefix: prefix.to_string(),
        source,
    };

    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(list_err(e)),
    };

    let mut keys = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(".json") {
            keys.push(format!("{prefix}{name}"));
        }
    }
    keys.sort();
    Ok(keys)
}
