//! Ordered composition of transformations.

use polars::prelude::DataFrame;

use lifexp_model::{COL_COUNTRY, COL_LIFE_EXPECTANCY, COL_REGION, COL_VALUE, COL_YEAR};

use crate::error::Result;
use crate::transformation::Transformation;

/// An ordered sequence of [`Transformation`]s applied as one unit.
///
/// The pipeline folds its steps over the input table, skipping any step
/// whose `is_necessary` reports there is nothing to do. It performs no
/// validation of step ordering — supplying a sequence that converges on the
/// canonical table is the caller's job, and [`TransformationPipeline::canonical`]
/// is the one place that knows the standard order.
#[derive(Debug, Clone, Default)]
pub struct TransformationPipeline {
    transformations: Vec<Transformation>,
}

impl TransformationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard cleaning sequence for a target region code:
    /// rename → wide-to-long → select-country → year-to-numeric →
    /// value-to-numeric → drop-missing.
    ///
    /// The rename step folds JSON input (`life_expectancy`/`country`) into
    /// the same column names the reshape produces, so both raw shapes share
    /// one pipeline.
    pub fn canonical(region_code: &str) -> Self {
        Self::new()
            .with_transformation(Transformation::RenameColumns {
                mapping: vec![
                    (COL_LIFE_EXPECTANCY.to_string(), COL_VALUE.to_string()),
                    (COL_COUNTRY.to_string(), COL_REGION.to_string()),
                ],
            })
            .with_transformation(Transformation::WideToLong)
            .with_transformation(Transformation::SelectCountry {
                code: region_code.to_string(),
            })
            .with_transformation(Transformation::ConvertYearToNumeric)
            .with_transformation(Transformation::ConvertValueToNumeric)
            .with_transformation(Transformation::DropMissingValues {
                columns: vec![COL_YEAR.to_string(), COL_VALUE.to_string()],
            })
    }

    pub fn add_transformation(&mut self, transformation: Transformation) {
        self.transformations.push(transformation);
    }

    #[must_use]
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformations.push(transformation);
        self
    }

    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    /// Fold the pipeline over `table`, returning the final table.
    pub fn transform(&self, table: DataFrame) -> Result<DataFrame> {
        let mut data = table;
        for transformation in &self.transformations {
            if transformation.is_necessary(&data) {
                let rows_in = data.height();
                data = transformation.transform(&data)?;
                tracing::debug!(
                    step = transformation.name(),
                    rows_in,
                    rows_out = data.height(),
                    "applied transformation"
                );
            } else {
                tracing::debug!(step = transformation.name(), "skipped transformation");
            }
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, NamedFrom, Series};

    #[test]
    fn test_empty_pipeline_is_identity() {
        let df = DataFrame::new(vec![Series::new("region".into(), vec!["PT"]).into()]).unwrap();
        let out = TransformationPipeline::new().transform(df.clone()).unwrap();
        assert_eq!(out, df);
    }

    #[test]
    fn test_canonical_order() {
        let pipeline = TransformationPipeline::canonical("PT");
        let names: Vec<&str> = pipeline
            .transformations()
            .iter()
            .map(|step| step.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "rename-columns",
                "wide-to-long",
                "select-country",
                "year-to-numeric",
                "value-to-numeric",
                "drop-missing-values",
            ]
        );
    }
}
