//! Record-oriented JSON loading.
//!
//! The JSON shape of the dataset is an array of flat records. Unlike the TSV
//! export it is already long-shaped; the loader's only obligations are to
//! take the union of keys as the column set and to give each column a single
//! type: Int64 when every present value is an integer, Float64 when every
//! present value is numeric, String otherwise. Missing keys become nulls.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use serde_json::{Map, Value};

use crate::error::{IngestError, Result};

pub fn load_json(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let root: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| IngestError::MalformedInput {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let Value::Array(items) = root else {
        return Err(IngestError::MalformedInput {
            path: path.to_path_buf(),
            message: "expected a top-level array of records".to_string(),
        });
    };

    let mut records: Vec<&Map<String, Value>> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(record) = item else {
            return Err(IngestError::MalformedInput {
                path: path.to_path_buf(),
                message: format!("record {index} is not an object"),
            });
        };
        records.push(record);
    }

    let columns = column_names(&records);
    let mut built: Vec<Column> = Vec::with_capacity(columns.len());
    for name in &columns {
        built.push(build_column(path, name, &records)?);
    }

    let df = DataFrame::new(built).map_err(|e| IngestError::MalformedInput {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded record-oriented JSON file"
    );

    Ok(df)
}

/// Union of record keys, in first-seen order.
fn column_names(records: &[&Map<String, Value>]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !names.iter().any(|existing| existing == key) {
                names.push(key.clone());
            }
        }
    }
    names
}

fn build_column(path: &Path, name: &str, records: &[&Map<String, Value>]) -> Result<Column> {
    let mut all_integer = true;
    let mut all_numeric = true;
    for record in records {
        match record.get(name) {
            None | Some(Value::Null) => {}
            Some(Value::Number(n)) => {
                if n.as_i64().is_none() {
                    all_integer = false;
                }
            }
            Some(_) => {
                all_integer = false;
                all_numeric = false;
            }
        }
    }

    let column = if all_integer {
        let values: Vec<Option<i64>> = records
            .iter()
            .map(|record| record.get(name).and_then(Value::as_i64))
            .collect();
        Series::new(name.into(), values).into()
    } else if all_numeric {
        let values: Vec<Option<f64>> = records
            .iter()
            .map(|record| record.get(name).and_then(Value::as_f64))
            .collect();
        Series::new(name.into(), values).into()
    } else {
        let mut values: Vec<Option<String>> = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let rendered = match record.get(name) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                Some(Value::Bool(b)) => Some(b.to_string()),
                Some(other) => {
                    return Err(IngestError::MalformedInput {
                        path: path.to_path_buf(),
                        message: format!(
                            "record {index} field {name:?} holds a nested {} value",
                            kind_name(other)
                        ),
                    });
                }
            };
            values.push(rendered);
        }
        Series::new(name.into(), values).into()
    };

    Ok(column)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
