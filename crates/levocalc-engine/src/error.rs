use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown clearance model: {0}")]
    UnknownClearanceModel(String),
}
