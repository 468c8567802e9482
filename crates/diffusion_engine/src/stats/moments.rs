//! Sample moments.

use diffusion_core::types::{DistributionSummary, SimulationError, SimulationResult};
use rayon::prelude::*;

use crate::mc::PathBatch;

/// Sample mean and population variance (÷N) of `values`.
///
/// Two-pass evaluation in index order, so the result is deterministic.
///
/// # Errors
///
/// `InvalidParameter` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use diffusion_engine::stats::empirical_summary;
///
/// let summary = empirical_summary(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(summary.mean, 2.5);
/// assert_eq!(summary.variance, 1.25);
/// ```
pub fn empirical_summary(values: &[f64]) -> SimulationResult<DistributionSummary> {
    if values.is_empty() {
        return Err(SimulationError::InvalidParameter {
            field: "values",
            constraint: "must contain at least one sample",
            value: 0.0,
        });
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    Ok(DistributionSummary { mean, variance })
}

/// Cross-sectional summary at every grid point of `batch`.
///
/// Entry `k` summarises the values of all paths at `time_grid[k]`. Columns
/// are reduced in parallel; each column is reduced sequentially.
pub fn ensemble_statistics(batch: &PathBatch) -> Vec<DistributionSummary> {
    let width = batch.step_count() + 1;
    let n = batch.path_count() as f64;
    let values = batch.as_slice();

    (0..width)
        .into_par_iter()
        .map(|step| {
            let column = values.iter().skip(step).step_by(width);
            let mean = column.clone().sum::<f64>() / n;
            let variance = column
                .map(|x| {
                    let d = x - mean;
                    d * d
                })
                .sum::<f64>()
                / n;
            DistributionSummary { mean, variance }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::simulate;
    use approx::assert_relative_eq;
    use diffusion_core::types::SimulationParameters;

    #[test]
    fn test_population_variance() {
        let summary = empirical_summary(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.mean, 5.0);
        // Population variance is 4 (sample variance would be 32/7)
        assert_eq!(summary.variance, 4.0);
    }

    #[test]
    fn test_single_sample() {
        let summary = empirical_summary(&[3.5]).unwrap();
        assert_eq!(summary.mean, 3.5);
        assert_eq!(summary.variance, 0.0);
    }

    #[test]
    fn test_empty_rejected() {
        let err = empirical_summary(&[]).unwrap_err();
        assert_eq!(err.field(), Some("values"));
    }

    #[test]
    fn test_ensemble_matches_columns() {
        let params = SimulationParameters::builder()
            .path_count(50)
            .step_size(0.1)
            .seed(17)
            .build()
            .unwrap();
        let batch = simulate(&params).unwrap();
        let ensemble = ensemble_statistics(&batch);

        assert_eq!(ensemble.len(), 11);
        assert_eq!(ensemble[0], DistributionSummary::new(100.0, 0.0));
        for (step, summary) in ensemble.iter().enumerate() {
            let expected = empirical_summary(&batch.column(step).unwrap()).unwrap();
            assert_relative_eq!(summary.mean, expected.mean, epsilon = 1e-9);
            assert_relative_eq!(summary.variance, expected.variance, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ensemble_variance_grows() {
        let params = SimulationParameters::builder()
            .path_count(5_000)
            .step_size(0.25)
            .seed(3)
            .build()
            .unwrap();
        let ensemble = ensemble_statistics(&simulate(&params).unwrap());
        // σ²t = 100, 200, 300, 400 within sampling error
        for (k, summary) in ensemble.iter().enumerate().skip(1) {
            let expected = 400.0 * 0.25 * k as f64;
            assert!(
                (summary.variance - expected).abs() < 0.1 * expected,
                "step {}: variance {} vs {}",
                k,
                summary.variance,
                expected
            );
        }
    }
}
