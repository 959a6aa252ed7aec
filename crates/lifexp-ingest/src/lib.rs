//! Raw data loading for the life-expectancy pipeline.
//!
//! This crate turns a raw file into an in-memory Polars DataFrame with no
//! semantic cleaning applied. The parsing strategy is selected per call from
//! the file extension:
//!
//! - `.tsv` — tab-separated wide format, every column read as String
//! - `.json` — record-oriented JSON, columns typed from the records
//!
//! Anything else fails with [`IngestError::UnsupportedFormat`]; content that
//! cannot be parsed under its declared format fails with
//! [`IngestError::MalformedInput`]. Both are fatal to the run — per-cell
//! data quality is handled downstream by the transformation pipeline.

mod error;
mod json;
mod strategy;
mod tsv;

pub use error::{IngestError, Result};
pub use json::load_json;
pub use strategy::{DataLoader, LoadStrategy, file_extension};
pub use tsv::load_tsv;
