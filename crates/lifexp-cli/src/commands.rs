//! Command implementations wiring load → pipeline → save.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use lifexp_ingest::DataLoader;
use lifexp_model::{Region, RegionKind};
use lifexp_output::save_csv;
use lifexp_transform::TransformationPipeline;

use crate::cli::CleanArgs;

/// Outcome of a `clean` run, for the end-of-run summary.
#[derive(Debug, Clone)]
pub struct CleanSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub region: Region,
    pub rows_in: usize,
    pub rows_out: usize,
}

/// Load the input, apply the canonical pipeline, write the CSV.
pub fn run_clean(args: &CleanArgs) -> Result<CleanSummary> {
    let region: Region = args.country.parse()?;

    let raw = DataLoader::load(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let rows_in = raw.height();

    let pipeline = TransformationPipeline::canonical(region.code());
    let cleaned = pipeline
        .transform(raw)
        .with_context(|| format!("clean {}", args.input.display()))?;
    let rows_out = cleaned.height();

    tracing::info!(rows_in, rows_out, region = %region, "pipeline finished");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, region));
    save_csv(&cleaned, &output)?;

    Ok(CleanSummary {
        input: args.input.clone(),
        output,
        region,
        rows_in,
        rows_out,
    })
}

/// List the recognized region codes.
pub fn run_regions() {
    for region in Region::ALL {
        let kind = match region.kind() {
            RegionKind::Country => "country",
            RegionKind::Aggregate => "aggregate",
        };
        println!("{:<6} {kind}", region.code());
    }
}

/// One-line report printed after a successful `clean`.
pub fn print_summary(summary: &CleanSummary) {
    println!(
        "cleaned {} -> {} ({} of {} rows kept for {})",
        summary.input.display(),
        summary.output.display(),
        summary.rows_out,
        summary.rows_in,
        summary.region,
    );
}

/// Default output: `<input dir>/<code>_life_expectancy.csv`, code lower-cased.
fn default_output_path(input: &Path, region: Region) -> PathBuf {
    let file_name = format!("{}_life_expectancy.csv", region.code().to_lowercase());
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_beside_input() {
        let path = default_output_path(Path::new("data/eu_life_expectancy_raw.tsv"), Region::Pt);
        assert_eq!(path, PathBuf::from("data/pt_life_expectancy.csv"));
    }

    #[test]
    fn test_default_output_path_bare_file_name() {
        let path = default_output_path(Path::new("raw.tsv"), Region::Eu28);
        assert_eq!(path, PathBuf::from("eu28_life_expectancy.csv"));
    }
}
