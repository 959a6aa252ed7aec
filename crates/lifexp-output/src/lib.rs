//! CSV persistence of the cleaned table.
//!
//! Writing is deliberately thin: a header row, one line per row, comma
//! separator. The only schema awareness is column ordering — when the table
//! carries all six canonical columns they are written in the canonical
//! order, whatever order the pipeline left them in.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use lifexp_model::{CANONICAL_COLUMNS, has_canonical_columns};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Write `data` to `path` as CSV.
///
/// Canonical tables are reordered to `unit, sex, age, region, year, value`;
/// anything else is written with its columns as-is.
pub fn save_csv(data: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut ordered = if has_canonical_columns(data) {
        data.select(CANONICAL_COLUMNS)
            .context("reorder canonical columns")?
    } else {
        data.clone()
    };

    let mut file =
        File::create(path).with_context(|| format!("create output file {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut ordered)
        .with_context(|| format!("write csv {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = ordered.height(), "wrote cleaned table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn canonical_frame() -> DataFrame {
        // Columns deliberately out of canonical order
        DataFrame::new(vec![
            Series::new("value".into(), vec![21.0f64]).into(),
            Series::new("year".into(), vec![2021i64]).into(),
            Series::new("unit".into(), vec!["YR"]).into(),
            Series::new("sex".into(), vec!["F"]).into(),
            Series::new("age".into(), vec!["Y65"]).into(),
            Series::new("region".into(), vec!["PT"]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_save_csv_reorders_canonical_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pt_life_expectancy.csv");

        save_csv(&canonical_frame(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("unit,sex,age,region,year,value"));
        assert_eq!(lines.next(), Some("YR,F,Y65,PT,2021,21.0"));
    }

    #[test]
    fn test_save_csv_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/data.csv");

        save_csv(&canonical_frame(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_csv_non_canonical_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.csv");
        let df = DataFrame::new(vec![Series::new("region".into(), vec!["PT"]).into()]).unwrap();

        save_csv(&df, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("region"));
    }
}
