//! Error types for table transformations.

use thiserror::Error;

/// Errors that can occur while applying a transformation.
///
/// Per-cell data-quality problems are never errors: unparsable year/value
/// cells coerce to null and are removed by the drop step. Errors here mean a
/// transformation was applied outside its structural precondition.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the transformation requires is not in the table.
    #[error("column {column:?} not found in table")]
    MissingColumn { column: String },

    /// An underlying DataFrame operation failed.
    #[error("table operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
