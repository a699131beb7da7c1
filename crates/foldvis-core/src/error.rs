//! Error types for foldvis.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FoldVisError>;

/// Failures raised while validating or deriving residue features.
///
/// Every variant aborts the whole run; nothing is retried and no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FoldVisError {
    /// A column required by the schema is absent from the input table.
    #[error("missing required column `{column}`")]
    MissingColumn { column: String },

    /// More than one secondary-structure indicator is set for a residue.
    #[error("residue {protein_id}:{position} has conflicting secondary-structure flags {indicators:?}")]
    InvalidIndicatorState {
        protein_id: String,
        position: i64,
        indicators: Vec<String>,
    },

    /// A key field (accession, position) is null.
    #[error("column `{column}` has no value at row {row}")]
    MissingValue { column: String, row: usize },

    /// A cell holds text that cannot be read as the column's type.
    #[error("column `{column}` has unreadable value {value:?} at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },
}

impl FoldVisError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        FoldVisError::MissingColumn {
            column: column.into(),
        }
    }

    pub fn missing_value(column: impl Into<String>, row: usize) -> Self {
        FoldVisError::MissingValue {
            column: column.into(),
            row,
        }
    }

    pub fn invalid_value(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        FoldVisError::InvalidValue {
            column: column.into(),
            row,
            value: value.into(),
        }
    }
}
