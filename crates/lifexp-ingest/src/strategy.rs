//! Load-strategy selection by file extension.
//!
//! The supported format set is fixed and small, so the strategy lookup is a
//! closed enum dispatched with a `match` rather than a runtime registry.
//! The extension is authoritative: there is no content sniffing, and the
//! match is exact (case as supplied, leading dot included).

use std::path::Path;

use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};
use crate::json::load_json;
use crate::tsv::load_tsv;

/// A format-specific parser turning a raw file into an in-memory table.
///
/// Strategies are stateless; one is selected per load call and never cached
/// across formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Tab-separated wide-format export with the composite header column.
    Tsv,
    /// Record-oriented JSON, already long-shaped.
    Json,
}

impl LoadStrategy {
    /// Select the strategy registered for a file extension.
    ///
    /// The extension includes the leading dot (`".tsv"`, `".json"`) and is
    /// matched exactly.
    pub fn for_extension(extension: &str) -> Result<Self> {
        match extension {
            ".tsv" => Ok(LoadStrategy::Tsv),
            ".json" => Ok(LoadStrategy::Json),
            other => Err(IngestError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Load the file at `path` into a raw table.
    ///
    /// No semantic transformation is applied beyond what is needed to make
    /// the content tabular.
    pub fn load(self, path: &Path) -> Result<DataFrame> {
        match self {
            LoadStrategy::Tsv => load_tsv(path),
            LoadStrategy::Json => load_json(path),
        }
    }
}

/// Everything from the last `.` of the file name, or empty when absent.
///
/// Mirrors `splitext`-style behavior: `"x.tsv"` gives `".tsv"`, `"x"` and
/// `""` give `""`, `"dir.d/x"` gives `""`.
pub fn file_extension(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rfind('.').map(|idx| &name[idx..]))
        .unwrap_or("")
}

/// Entry point wiring extension dispatch to the selected strategy.
pub struct DataLoader;

impl DataLoader {
    /// Load the file at `path` using the strategy its extension selects.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` when the path is empty or its extension matches
    /// no registered strategy; `MalformedInput`/file errors from the
    /// selected strategy otherwise.
    pub fn load(path: &Path) -> Result<DataFrame> {
        if path.as_os_str().is_empty() {
            return Err(IngestError::UnsupportedFormat {
                extension: String::new(),
            });
        }
        let strategy = LoadStrategy::for_extension(file_extension(path))?;
        tracing::info!(path = %path.display(), ?strategy, "loading input file");
        strategy.load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_extension_tsv() {
        assert_eq!(
            LoadStrategy::for_extension(".tsv").unwrap(),
            LoadStrategy::Tsv
        );
    }

    #[test]
    fn test_for_extension_json() {
        assert_eq!(
            LoadStrategy::for_extension(".json").unwrap(),
            LoadStrategy::Json
        );
    }

    #[test]
    fn test_for_extension_rejects_unknown() {
        let err = LoadStrategy::for_extension(".csv").unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { extension } if extension == ".csv"
        ));
    }

    #[test]
    fn test_for_extension_is_case_exact() {
        assert!(LoadStrategy::for_extension(".TSV").is_err());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("x.tsv")), ".tsv");
        assert_eq!(file_extension(Path::new("data/eu_raw.json")), ".json");
        assert_eq!(file_extension(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(file_extension(Path::new("no_extension")), "");
        assert_eq!(file_extension(Path::new("dir.d/no_extension")), "");
    }

    #[test]
    fn test_load_empty_path() {
        let err = DataLoader::load(Path::new("")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = DataLoader::load(Path::new("x.csv")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { extension } if extension == ".csv"
        ));
    }
}
