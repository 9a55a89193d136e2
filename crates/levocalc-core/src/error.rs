use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown dose indication: {0}")]
    UnknownIndication(String),

    #[error("unsupported dose strength: {0} mg")]
    UnsupportedDose(u32),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
