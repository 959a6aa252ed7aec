//! Error types for raw data loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a raw data file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension matches no registered load strategy, or no path was
    /// given at all. The extension is reported exactly as supplied
    /// (empty when the path carries none).
    #[error("file format {extension:?} is not supported (expected \".tsv\" or \".json\")")]
    UnsupportedFormat { extension: String },

    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content cannot be parsed under the declared format rules.
    #[error("malformed input in {path}: {message}")]
    MalformedInput { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = IngestError::UnsupportedFormat {
            extension: ".csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "file format \".csv\" is not supported (expected \".tsv\" or \".json\")"
        );
    }
}
