//! Bands command implementation
//!
//! Prints the theoretical mean path and `mean ± k·σ(t)` envelopes over the
//! simulation time grid as CSV: `t,mean,lower_<k>,upper_<k>,...`.

use std::io::Write;

use diffusion_core::types::SimulationResult;
use diffusion_engine::mc::MatrixLayout;
use diffusion_models::analytical::{ArithmeticBrownianMotion, MarginalLaw, SigmaBand};
use tracing::info;

use crate::config::Settings;
use crate::{CliError, Result};

/// Run the bands command
pub fn run(settings: &Settings, multipliers: &[f64], out: &mut impl Write) -> Result<()> {
    if multipliers.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one band multiplier is required".to_string(),
        ));
    }

    let params = settings.parameters()?;
    let law = ArithmeticBrownianMotion::from_params(&params)?;
    let step_count = params.step_count();

    // Mean plus two columns per band, sized like a path matrix
    MatrixLayout::new(2 * multipliers.len() + 1, step_count)?;

    let time_grid: Vec<f64> = (0..=step_count)
        .map(|k| k as f64 * params.step_size)
        .collect();
    let bands = multipliers
        .iter()
        .map(|&k| law.sigma_band(&time_grid, k))
        .collect::<SimulationResult<Vec<SigmaBand>>>()?;
    info!(steps = step_count, bands = bands.len(), "Computed sigma bands");

    let mut writer = csv::Writer::from_writer(out);
    let mut header = vec!["t".to_string(), "mean".to_string()];
    for band in &bands {
        header.push(format!("lower_{}", band.multiplier));
        header.push(format!("upper_{}", band.multiplier));
    }
    writer.write_record(&header)?;

    for (k, t) in time_grid.iter().enumerate() {
        let mut record = vec![t.to_string(), bands[0].mean[k].to_string()];
        for band in &bands {
            record.push(band.lower[k].to_string());
            record.push(band.upper[k].to_string());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
