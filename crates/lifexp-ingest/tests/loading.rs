//! Integration tests for extension dispatch and loading.

use std::fs;
use std::path::Path;

use lifexp_ingest::{DataLoader, IngestError};
use polars::prelude::DataType;

#[test]
fn test_load_dispatches_on_tsv_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eu_life_expectancy_raw.tsv");
    fs::write(
        &path,
        "unit,sex,age,geo\\time\t2020\t2021\nYR,F,Y65,PT\t21.0\t78.5 e\n",
    )
    .unwrap();

    let df = DataLoader::load(&path).unwrap();

    assert_eq!(df.height(), 1);
    assert_eq!(df.width(), 3);
    assert!(df.column("unit,sex,age,geo\\time").is_ok());
}

#[test]
fn test_load_dispatches_on_json_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eurostat_life_expect.json");
    fs::write(
        &path,
        r#"[{"unit": "YR", "sex": "F", "age": "Y65", "country": "PT", "year": 2021, "life_expectancy": 21.0}]"#,
    )
    .unwrap();

    let df = DataLoader::load(&path).unwrap();

    assert_eq!(df.height(), 1);
    assert_eq!(df.column("year").unwrap().dtype(), &DataType::Int64);
    assert_eq!(
        df.column("life_expectancy").unwrap().dtype(),
        &DataType::Float64
    );
}

#[test]
fn test_load_rejects_unknown_extension() {
    let err = DataLoader::load(Path::new("x.csv")).unwrap_err();
    assert!(matches!(
        err,
        IngestError::UnsupportedFormat { extension } if extension == ".csv"
    ));
}

#[test]
fn test_load_rejects_empty_path() {
    let err = DataLoader::load(Path::new("")).unwrap_err();
    assert!(matches!(
        err,
        IngestError::UnsupportedFormat { extension } if extension.is_empty()
    ));
}

#[test]
fn test_load_surfaces_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "not json at all").unwrap();

    let err = DataLoader::load(&path).unwrap_err();
    assert!(matches!(err, IngestError::MalformedInput { .. }));
}
