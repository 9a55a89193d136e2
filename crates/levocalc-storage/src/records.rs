use std::path::{Path, PathBuf};

use levocalc_core::models::record::StoredRecord;
use levocalc_core::record_keys;
use uuid::Uuid;

use crate::error::StorageError;
use crate::objects;

/// Typed access to the record collections under one root directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All records of kind `T`, newest first.
    ///
    /// Documents that cannot be read or parsed are skipped with a warning so
    /// one bad file does not hide the rest of the history.
    pub async fn list<T: StoredRecord>(&self) -> Result<Vec<T>, StorageError> {
        let keys = objects::list_objects(&self.root, T::PREFIX).await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            let parsed = objects::get_object(&self.root, key)
                .await
                .and_then(|body| serde_json::from_slice::<T>(&body).map_err(StorageError::from));
            match parsed {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(key = %key, error = %e, "skipping unreadable record"),
            }
        }

        records.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        tracing::debug!(prefix = T::PREFIX, count = records.len(), "records listed");
        Ok(records)
    }

    pub async fn get<T: StoredRecord>(&self, id: Uuid) -> Result<T, StorageError> {
        let key = record_keys::record(T::PREFIX, id);
        let body = objects::get_object(&self.root, &key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Insert a new record. Fails with [`StorageError::AlreadyExists`] if the
    /// id is taken.
    pub async fn insert<T: StoredRecord>(&self, record: &T) -> Result<(), StorageError> {
        let key = record_keys::record(T::PREFIX, record.id());
        let body = serde_json::to_vec_pretty(record)?;
        objects::put_object_if_absent(&self.root, &key, &body).await?;
        tracing::info!(key = %key, "record inserted");
        Ok(())
    }

    pub async fn delete<T: StoredRecord>(&self, id: Uuid) -> Result<(), StorageError> {
        let key = record_keys::record(T::PREFIX, id);
        objects::delete_object(&self.root, &key).await?;
        tracing::info!(key = %key, "record deleted");
        Ok(())
    }
}
