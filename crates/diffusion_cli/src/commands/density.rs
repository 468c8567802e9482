//! Density command implementation
//!
//! Prints the closed-form density at a given time as CSV (`x,density`).

use std::io::Write;

use diffusion_core::types::SimulationError;
use diffusion_models::analytical::{ArithmeticBrownianMotion, MarginalLaw};
use tracing::info;

use crate::config::Settings;
use crate::Result;

/// Default half-width of the plotted range, in standard deviations.
const RANGE_STD_DEVS: f64 = 4.0;

/// Run the density command
pub fn run(
    settings: &Settings,
    time: Option<f64>,
    lower: Option<f64>,
    upper: Option<f64>,
    points: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let params = settings.parameters()?;
    let law = ArithmeticBrownianMotion::from_params(&params)?;
    let time = time.unwrap_or(params.horizon);
    let points = points.unwrap_or(settings.output.density_points);

    let summary = law.moments(time)?;
    let sd = summary.std_dev();
    if sd == 0.0 {
        return Err(SimulationError::DegenerateDistribution {
            reason: format!("zero variance at t = {}", time),
        }
        .into());
    }
    let lower = lower.unwrap_or(summary.mean - RANGE_STD_DEVS * sd);
    let upper = upper.unwrap_or(summary.mean + RANGE_STD_DEVS * sd);

    info!(time, lower, upper, points, "Evaluating density curve");
    let curve = law.density_curve(time, lower, upper, points)?;

    let mut writer = csv::Writer::from_writer(out);
    for point in &curve {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;

    fn rows(output: &[u8]) -> Vec<(f64, f64)> {
        let mut reader = csv::Reader::from_reader(output);
        reader
            .deserialize::<(f64, f64)>()
            .map(|row| row.unwrap())
            .collect()
    }

    #[test]
    fn test_default_range_and_points() {
        let mut out = Vec::new();
        run(&Settings::default(), None, None, None, None, &mut out).unwrap();
        assert!(out.starts_with(b"x,density\n"));

        let curve = rows(&out);
        assert_eq!(curve.len(), 500);
        assert_relative_eq!(curve[0].0, 20.0, epsilon = 1e-9);
        assert_eq!(curve[499].0, 180.0);

        let peak = curve.iter().map(|&(_, d)| d).fold(0.0, f64::max);
        assert!(peak < 1.0 / (20.0 * (2.0 * std::f64::consts::PI).sqrt()));
    }

    #[test]
    fn test_explicit_range() {
        let mut out = Vec::new();
        run(
            &Settings::default(),
            Some(0.25),
            Some(90.0),
            Some(110.0),
            Some(3),
            &mut out,
        )
        .unwrap();

        let curve = rows(&out);
        assert_eq!(curve.iter().map(|r| r.0).collect::<Vec<_>>(), vec![90.0, 100.0, 110.0]);
        // σ√t = 10 at t = 0.25
        assert_relative_eq!(curve[1].1, 1.0 / (10.0 * (2.0 * std::f64::consts::PI).sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn test_time_zero_is_degenerate() {
        let mut out = Vec::new();
        let err = run(&Settings::default(), Some(0.0), None, None, None, &mut out).unwrap_err();
        assert!(matches!(
            err,
            CliError::Simulation(SimulationError::DegenerateDistribution { .. })
        ));
    }

    #[test]
    fn test_too_few_points_rejected() {
        let mut out = Vec::new();
        let err = run(&Settings::default(), None, None, None, Some(1), &mut out).unwrap_err();
        match err {
            CliError::Simulation(e) => assert_eq!(e.field(), Some("points")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
