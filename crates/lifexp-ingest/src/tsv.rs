//! Tab-separated loading of the wide-format Eurostat export.

use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Read a tab-separated file into a DataFrame.
///
/// The first row is the header; every column is read as String so raw cells
/// keep their annotations (`"78.5 e"`) and the composite header column stays
/// intact for the reshape step. Type coercion is the pipeline's job, not the
/// loader's.
pub fn load_tsv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        // 0 disables schema inference: all columns land as String
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_separator(b'\t'))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::MalformedInput {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::MalformedInput {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded tab-separated file"
    );

    Ok(df)
}
