//! Column names for the raw and canonical table shapes.

use polars::prelude::DataFrame;

/// Composite header column carried by the raw wide-format TSV export.
///
/// Each cell holds four comma-joined fields (`unit`, `sex`, `age`, region
/// code); the backslash is part of the literal column name.
pub const COMPOSITE_COLUMN: &str = "unit,sex,age,geo\\time";

pub const COL_UNIT: &str = "unit";
pub const COL_SEX: &str = "sex";
pub const COL_AGE: &str = "age";
pub const COL_REGION: &str = "region";
pub const COL_YEAR: &str = "year";
pub const COL_VALUE: &str = "value";

/// Raw JSON column renamed to [`COL_VALUE`] by the pipeline.
pub const COL_LIFE_EXPECTANCY: &str = "life_expectancy";

/// Raw JSON column renamed to [`COL_REGION`] by the pipeline.
pub const COL_COUNTRY: &str = "country";

/// The canonical long-format column order used for persistence.
pub const CANONICAL_COLUMNS: [&str; 6] =
    [COL_UNIT, COL_SEX, COL_AGE, COL_REGION, COL_YEAR, COL_VALUE];

/// True when every canonical column is present (in any order).
pub fn has_canonical_columns(df: &DataFrame) -> bool {
    CANONICAL_COLUMNS.iter().all(|name| df.column(name).is_ok())
}
