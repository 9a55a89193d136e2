use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {key}")]
    NotFound { key: String },

    #[error("record already exists: {key}")]
    AlreadyExists { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },

    #[error("failed to delete {key}: {source}")]
    Delete {
        key: String,
        source: std::io::Error,
    },

    #[error("failed to list {prefix}: {source}")]
    List {
        prefix: String,
        source: std::io::Error,
    },
}
