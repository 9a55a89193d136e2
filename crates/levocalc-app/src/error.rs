use levocalc_core::form::FormErrors;
use levocalc_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormErrors),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("observation text is empty")]
    EmptyObservation,
}
