//! Simulate command implementation
//!
//! Runs a batch, compares the terminal column with the closed-form moments
//! and optionally exports every path as CSV.

use std::io::Write;
use std::path::Path;

use diffusion_core::types::{RelativeError, SimulationError, SimulationParameters};
use diffusion_engine::mc::{simulate, PathBatch};
use diffusion_engine::stats::{compare, Comparison, Histogram};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{OutputFormat, Settings};
use crate::Result;

/// JSON report of a simulation run.
#[derive(Debug, Serialize)]
struct SimulationReport<'a> {
    parameters: &'a SimulationParameters,
    step_count: usize,
    seed: Option<u64>,
    comparison: Comparison,
    relative_error: RelativeError,
    #[serde(skip_serializing_if = "Option::is_none")]
    histogram: Option<Histogram>,
}

/// Run the simulate command
pub fn run(
    settings: &Settings,
    format: OutputFormat,
    export: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let params = settings.parameters()?;
    info!(
        paths = params.path_count,
        steps = params.step_count(),
        "Starting simulation"
    );

    let batch = simulate(&params)?;
    let comparison = compare(&batch, &params)?;
    info!(seed = ?batch.seed(), "Simulation complete");

    if let Some(path) = export {
        let mut writer = csv::Writer::from_path(path)?;
        write_paths(&batch, &mut writer)?;
        info!("Exported {} paths to {}", batch.path_count(), path.display());
    }

    match format {
        OutputFormat::Table => write_table(&batch, &comparison, out)?,
        OutputFormat::Json => {
            let report = SimulationReport {
                parameters: &params,
                step_count: batch.step_count(),
                seed: batch.seed(),
                comparison,
                relative_error: comparison.relative_error(),
                histogram: terminal_histogram(&batch, settings.output.histogram_bins)?,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Writes the path table: one row per time point, columns `t, path_0, path_1, ...`.
pub fn write_paths<W: Write>(batch: &PathBatch, writer: &mut csv::Writer<W>) -> Result<()> {
    let header = std::iter::once("t".to_string())
        .chain((0..batch.path_count()).map(|i| format!("path_{}", i)));
    writer.write_record(header)?;

    for (t, values) in batch.rows_by_time() {
        let record =
            std::iter::once(t.to_string()).chain(values.iter().map(|v| v.to_string()));
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Histogram of terminal values, omitted for `bins == 0` or a point-mass sample.
fn terminal_histogram(batch: &PathBatch, bins: usize) -> Result<Option<Histogram>> {
    if bins == 0 {
        return Ok(None);
    }
    match Histogram::density(&batch.terminal_values(), bins) {
        Ok(histogram) => Ok(Some(histogram)),
        Err(SimulationError::DegenerateDistribution { reason }) => {
            debug!(%reason, "Terminal histogram omitted");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn write_table(batch: &PathBatch, comparison: &Comparison, out: &mut impl Write) -> Result<()> {
    let error = comparison.relative_error();

    writeln!(
        out,
        "\nPaths: {}  Steps: {}  Seed: {}  t = {}",
        batch.path_count(),
        batch.step_count(),
        batch
            .seed()
            .map_or_else(|| "mid-stream".to_string(), |seed| seed.to_string()),
        comparison.time
    )?;
    writeln!(out, "┌────────────┬──────────────────┬──────────────────┬────────────┐")?;
    writeln!(out, "│ Statistic  │ Theoretical      │ Empirical        │ Error %    │")?;
    writeln!(out, "├────────────┼──────────────────┼──────────────────┼────────────┤")?;
    writeln!(
        out,
        "│ Mean       │ {:>16.4} │ {:>16.4} │ {:>9.3}% │",
        comparison.theoretical.mean, comparison.empirical.mean, error.mean_pct
    )?;
    writeln!(
        out,
        "│ Variance   │ {:>16.4} │ {:>16.4} │ {:>9.3}% │",
        comparison.theoretical.variance, comparison.empirical.variance, error.variance_pct
    )?;
    writeln!(out, "└────────────┴──────────────────┴──────────────────┴────────────┘")?;
    Ok(())
}
