use foldvis_core::FoldVisError;
use polars::prelude::PolarsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Error, Debug)]
pub enum IoError {
    /// Schema or derivation failure.
    #[error(transparent)]
    Data(#[from] FoldVisError),

    #[error("table error: {0}")]
    Polars(#[from] PolarsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
