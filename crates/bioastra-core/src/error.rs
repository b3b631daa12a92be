//! Error type for the core crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Two records in the input share an `id`.
    #[error("duplicate record id `{0}`")]
    DuplicateId(String),

    /// A lookup by id found nothing.
    #[error("study `{0}` not found")]
    StudyNotFound(String),

    /// The record source could not produce its records.
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read record file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse records: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
