//! Single-step table transformations.
//!
//! The supported operations form a closed set, so they are a tagged enum
//! dispatched with a `match` rather than trait objects. Every variant is
//! stateless per call and owns only its configuration; `transform` returns a
//! fresh table and never mutates its input.

use polars::prelude::{
    AnyValue, BooleanChunked, Column, DataFrame, DataType, NamedFrom, NewChunkedArray, Series,
};

use lifexp_model::{
    COL_AGE, COL_REGION, COL_SEX, COL_UNIT, COL_VALUE, COL_YEAR, COMPOSITE_COLUMN, any_to_f64,
    any_to_i64, any_to_string,
};

use crate::coerce::{extract_value, parse_year};
use crate::error::{Result, TransformError};

/// A single table operation with an applicability check.
///
/// `transform` may fail with [`TransformError::MissingColumn`] when applied
/// outside its precondition; callers are expected to consult
/// [`Transformation::is_necessary`] first, which is what makes a second
/// pipeline run over already-canonical data a no-op.
#[derive(Debug, Clone)]
pub enum Transformation {
    /// Split the composite `unit,sex,age,geo\time` column and melt the
    /// per-year columns into `year`/`value` rows.
    WideToLong,

    /// Rename source columns per a fixed mapping; absent sources are
    /// skipped, unmapped columns pass through.
    RenameColumns { mapping: Vec<(String, String)> },

    /// Keep rows whose `region` equals the target code, case-insensitively.
    SelectCountry { code: String },

    /// Coerce the `year` column to integers; unparsable cells become null.
    ConvertYearToNumeric,

    /// Coerce the `value` column to floats by extracting the first numeric
    /// token; cells without one become null.
    ConvertValueToNumeric,

    /// Remove rows that are null in any of the configured columns.
    DropMissingValues { columns: Vec<String> },
}

impl Transformation {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::WideToLong => "wide-to-long",
            Transformation::RenameColumns { .. } => "rename-columns",
            Transformation::SelectCountry { .. } => "select-country",
            Transformation::ConvertYearToNumeric => "year-to-numeric",
            Transformation::ConvertValueToNumeric => "value-to-numeric",
            Transformation::DropMissingValues { .. } => "drop-missing-values",
        }
    }

    /// Whether applying this step would change anything.
    ///
    /// Filtering steps always run (they are no-ops on conforming data);
    /// reshaping and coercion steps are skipped once their postcondition
    /// already holds.
    pub fn is_necessary(&self, data: &DataFrame) -> bool {
        match self {
            Transformation::WideToLong => data.column(COMPOSITE_COLUMN).is_ok(),
            Transformation::RenameColumns { mapping } => mapping
                .iter()
                .any(|(source, _)| data.column(source).is_ok()),
            Transformation::SelectCountry { .. } | Transformation::DropMissingValues { .. } => true,
            Transformation::ConvertYearToNumeric => data
                .column(COL_YEAR)
                .map(|column| column.dtype() != &DataType::Int64)
                .unwrap_or(true),
            Transformation::ConvertValueToNumeric => data
                .column(COL_VALUE)
                .map(|column| column.dtype() != &DataType::Float64)
                .unwrap_or(true),
        }
    }

    /// Apply this step to `data`, producing a new table.
    pub fn transform(&self, data: &DataFrame) -> Result<DataFrame> {
        match self {
            Transformation::WideToLong => wide_to_long(data),
            Transformation::RenameColumns { mapping } => rename_columns(data, mapping),
            Transformation::SelectCountry { code } => select_country(data, code),
            Transformation::ConvertYearToNumeric => convert_year(data),
            Transformation::ConvertValueToNumeric => convert_value(data),
            Transformation::DropMissingValues { columns } => drop_missing(data, columns),
        }
    }
}

fn required_column<'a>(data: &'a DataFrame, name: &str) -> Result<&'a Column> {
    data.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })
}

/// Split the composite column into the four identity columns and melt every
/// remaining column into `year`/`value` pairs.
///
/// Output rows are grouped year-column by year-column; within a year block
/// the input row order is preserved, so the result has exactly
/// `rows x year_columns` rows and six columns.
fn wide_to_long(data: &DataFrame) -> Result<DataFrame> {
    let composite = required_column(data, COMPOSITE_COLUMN)?.str()?;

    let year_columns: Vec<String> = data
        .get_column_names()
        .iter()
        .filter(|name| name.as_str() != COMPOSITE_COLUMN)
        .map(|name| name.to_string())
        .collect();

    let height = data.height();

    // Split each composite cell once; missing trailing fields become empty.
    let mut identity: Vec<[String; 4]> = Vec::with_capacity(height);
    for cell in composite.into_iter() {
        let raw = cell.unwrap_or("");
        let mut fields = raw.split(',');
        identity.push([
            fields.next().unwrap_or("").to_string(),
            fields.next().unwrap_or("").to_string(),
            fields.next().unwrap_or("").to_string(),
            fields.next().unwrap_or("").to_string(),
        ]);
    }

    let capacity = height * year_columns.len();
    let mut units: Vec<String> = Vec::with_capacity(capacity);
    let mut sexes: Vec<String> = Vec::with_capacity(capacity);
    let mut ages: Vec<String> = Vec::with_capacity(capacity);
    let mut regions: Vec<String> = Vec::with_capacity(capacity);
    let mut years: Vec<String> = Vec::with_capacity(capacity);
    let mut values: Vec<Option<String>> = Vec::with_capacity(capacity);

    for name in &year_columns {
        let column = data.column(name)?;
        for row in 0..height {
            let fields = &identity[row];
            units.push(fields[0].clone());
            sexes.push(fields[1].clone());
            ages.push(fields[2].clone());
            regions.push(fields[3].clone());
            years.push(name.clone());
            values.push(any_to_string(&column.get(row)?));
        }
    }

    let melted = DataFrame::new(vec![
        Series::new(COL_UNIT.into(), units).into(),
        Series::new(COL_SEX.into(), sexes).into(),
        Series::new(COL_AGE.into(), ages).into(),
        Series::new(COL_REGION.into(), regions).into(),
        Series::new(COL_YEAR.into(), years).into(),
        Series::new(COL_VALUE.into(), values).into(),
    ])?;

    Ok(melted)
}

fn rename_columns(data: &DataFrame, mapping: &[(String, String)]) -> Result<DataFrame> {
    let mut renamed = data.clone();
    for (source, target) in mapping {
        if renamed.column(source).is_ok() {
            renamed.rename(source, target.as_str().into())?;
        }
    }
    Ok(renamed)
}

fn select_country(data: &DataFrame, code: &str) -> Result<DataFrame> {
    let target = code.to_uppercase();
    let region = required_column(data, COL_REGION)?.str()?;

    // Null regions never match and fall out with the filter.
    let keep: Vec<bool> = region
        .into_iter()
        .map(|cell| cell.is_some_and(|value| value.to_uppercase() == target))
        .collect();

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(data.filter(&mask)?)
}

fn convert_year(data: &DataFrame) -> Result<DataFrame> {
    let column = required_column(data, COL_YEAR)?;

    let mut parsed: Vec<Option<i64>> = Vec::with_capacity(data.height());
    for row in 0..data.height() {
        let cell = column.get(row)?;
        parsed.push(match &cell {
            AnyValue::String(s) => parse_year(s),
            AnyValue::StringOwned(s) => parse_year(s),
            other => any_to_i64(other),
        });
    }

    let mut converted = data.clone();
    converted.with_column(Series::new(COL_YEAR.into(), parsed))?;
    Ok(converted)
}

fn convert_value(data: &DataFrame) -> Result<DataFrame> {
    let column = required_column(data, COL_VALUE)?;

    let mut parsed: Vec<Option<f64>> = Vec::with_capacity(data.height());
    for row in 0..data.height() {
        let cell = column.get(row)?;
        parsed.push(match &cell {
            AnyValue::String(s) => extract_value(s),
            AnyValue::StringOwned(s) => extract_value(s),
            other => any_to_f64(other),
        });
    }

    let mut converted = data.clone();
    converted.with_column(Series::new(COL_VALUE.into(), parsed))?;
    Ok(converted)
}

fn drop_missing(data: &DataFrame, columns: &[String]) -> Result<DataFrame> {
    let mut keep = vec![true; data.height()];
    for name in columns {
        let column = required_column(data, name)?;
        for (row, flag) in keep.iter_mut().enumerate() {
            if matches!(column.get(row)?, AnyValue::Null) {
                *flag = false;
            }
        }
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(data.filter(&mask)?)
}
