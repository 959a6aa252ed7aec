//! Shared data-model definitions for the life-expectancy pipeline.
//!
//! This crate owns the pieces every other crate agrees on:
//!
//! - **Schema**: the canonical long-format column set and the raw composite
//!   column that wide-format Eurostat files carry.
//! - **Regions**: the enumeration of geographic codes the CLI accepts,
//!   split into countries and aggregates.
//! - **Value helpers**: bridging between Polars `AnyValue` cells and the
//!   strings/numbers the transformations operate on.

mod region;
mod schema;
mod values;

pub use region::{Region, RegionKind, UnknownRegion};
pub use schema::{
    CANONICAL_COLUMNS, COL_AGE, COL_COUNTRY, COL_LIFE_EXPECTANCY, COL_REGION, COL_SEX, COL_UNIT,
    COL_VALUE, COL_YEAR, COMPOSITE_COLUMN, has_canonical_columns,
};
pub use values::{any_to_f64, any_to_i64, any_to_string, format_numeric};
