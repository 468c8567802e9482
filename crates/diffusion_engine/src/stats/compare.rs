//! Empirical versus theoretical terminal statistics.
//!
//! The comparison is diagnostic: it reduces the terminal column of a batch
//! and places it next to the closed-form moments at the horizon. It never
//! judges the batch itself; callers choose tolerances via [`Comparison::within`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use diffusion_core::types::{
    DistributionSummary, RelativeError, SimulationError, SimulationParameters, SimulationResult,
};
use diffusion_models::analytical::{ArithmeticBrownianMotion, MarginalLaw};

use super::moments::empirical_summary;
use crate::mc::PathBatch;

/// Terminal empirical moments next to their theoretical counterparts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comparison {
    /// Time at which the theoretical moments were evaluated.
    pub time: f64,
    /// Grid time of the terminal column, `step_count · step_size`.
    pub terminal_time: f64,
    /// Number of samples behind the empirical summary.
    pub path_count: usize,
    /// Mean and population variance of the terminal values.
    pub empirical: DistributionSummary,
    /// Closed-form mean and variance.
    pub theoretical: DistributionSummary,
}

impl Comparison {
    /// `empirical.mean - theoretical.mean`.
    #[inline]
    pub fn mean_error(&self) -> f64 {
        self.empirical.mean - self.theoretical.mean
    }

    /// `empirical.variance - theoretical.variance`.
    #[inline]
    pub fn variance_error(&self) -> f64 {
        self.empirical.variance - self.theoretical.variance
    }

    /// Percentage errors of the empirical summary.
    #[inline]
    pub fn relative_error(&self) -> RelativeError {
        self.empirical.relative_error(&self.theoretical)
    }

    /// Whether both absolute errors are within the given tolerances.
    #[inline]
    pub fn within(&self, mean_tolerance: f64, variance_tolerance: f64) -> bool {
        self.mean_error().abs() <= mean_tolerance
            && self.variance_error().abs() <= variance_tolerance
    }
}

/// Compares the terminal column of `batch` with the arithmetic Brownian
/// motion moments at `params.horizon`.
///
/// The terminal column sits at `round(T/dt)·dt`, which differs from the
/// horizon when `T/dt` is not an integer (for `T = 1`, `dt = 0.3` the grid
/// ends at 0.9 and the theoretical variance is 10% above the sampled one).
/// [`Comparison::terminal_time`] reports the grid time so callers can detect
/// the gap, or use [`compare_with_law`] at that time instead.
///
/// # Errors
///
/// - `InvalidParameter` if `params` fail validation, or if the batch shape
///   does not match `params` (field `path_count` or `step_size`)
///
/// # Examples
///
/// ```rust
/// use diffusion_core::types::SimulationParameters;
/// use diffusion_engine::mc::simulate;
/// use diffusion_engine::stats::compare;
///
/// let params = SimulationParameters::builder()
///     .drift(10.0)
///     .path_count(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let batch = simulate(&params).unwrap();
/// let comparison = compare(&batch, &params).unwrap();
///
/// assert_eq!(comparison.theoretical.mean, 110.0);
/// assert!(comparison.within(1.0, 20.0));
/// ```
pub fn compare(batch: &PathBatch, params: &SimulationParameters) -> SimulationResult<Comparison> {
    params.validate()?;
    if batch.path_count() != params.path_count {
        return Err(SimulationError::InvalidParameter {
            field: "path_count",
            constraint: "must match the batch path count",
            value: params.path_count as f64,
        });
    }
    if batch.step_count() != params.step_count() {
        return Err(SimulationError::InvalidParameter {
            field: "step_size",
            constraint: "must produce the batch step count",
            value: params.step_size,
        });
    }

    let law = ArithmeticBrownianMotion::from_params(params)?;
    compare_with_law(batch, &law, params.horizon)
}

/// Compares the terminal column of `batch` with any closed-form law at `time`.
///
/// # Errors
///
/// Propagates errors from [`MarginalLaw::moments`].
pub fn compare_with_law<L: MarginalLaw>(
    batch: &PathBatch,
    law: &L,
    time: f64,
) -> SimulationResult<Comparison> {
    let empirical = empirical_summary(&batch.terminal_values())?;
    let theoretical = law.moments(time)?;
    let terminal_time = batch.time_grid().last().copied().unwrap_or(0.0);
    Ok(Comparison {
        time,
        terminal_time,
        path_count: batch.path_count(),
        empirical,
        theoretical,
    })
}
