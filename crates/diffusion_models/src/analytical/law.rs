//! Trait over closed-form time-t marginal distributions.
//!
//! Implementors supply moments, density and CDF; the derived curves used by
//! the presentation layer (density curve over a range, mean ± kσ envelopes
//! over a time grid) come for free.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use diffusion_core::types::{DistributionSummary, SimulationError, SimulationResult};

/// One sample of a density curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DensityPoint {
    /// Evaluation point.
    pub x: f64,
    /// Density at `x`.
    pub density: f64,
}

/// Mean path with a symmetric `mean ± multiplier·σ(t)` envelope.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SigmaBand {
    /// Standard deviation multiplier (k).
    pub multiplier: f64,
    /// Time points.
    pub times: Vec<f64>,
    /// E[S_t] at each time point.
    pub mean: Vec<f64>,
    /// `mean - k·σ(t)`.
    pub lower: Vec<f64>,
    /// `mean + k·σ(t)`.
    pub upper: Vec<f64>,
}

/// Closed-form marginal law of a one-dimensional diffusion at time `t`.
pub trait MarginalLaw {
    /// Mean and variance at `time`.
    ///
    /// # Errors
    /// `InvalidParameter` for negative or non-finite `time`.
    fn moments(&self, time: f64) -> SimulationResult<DistributionSummary>;

    /// Probability density at `x` and `time`.
    ///
    /// # Errors
    /// `DegenerateDistribution` when the law is a point mass.
    fn density(&self, x: f64, time: f64) -> SimulationResult<f64>;

    /// Cumulative probability `P(S_t <= x)`.
    ///
    /// # Errors
    /// `DegenerateDistribution` when the law is a point mass.
    fn cdf(&self, x: f64, time: f64) -> SimulationResult<f64>;

    /// Standard deviation at `time`.
    fn std_dev(&self, time: f64) -> SimulationResult<f64> {
        Ok(self.moments(time)?.std_dev())
    }

    /// Expected value at every point of `time_grid`.
    ///
    /// # Errors
    /// As for [`moments`](Self::moments).
    fn mean_path(&self, time_grid: &[f64]) -> SimulationResult<Vec<f64>> {
        time_grid
            .iter()
            .map(|&t| Ok(self.moments(t)?.mean))
            .collect()
    }

    /// Density sampled at `points` evenly spaced values in `[lower, upper]`.
    ///
    /// # Errors
    /// - `InvalidParameter` if `points < 2` or the range is empty or non-finite
    /// - `DegenerateDistribution` as for [`density`](Self::density)
    fn density_curve(
        &self,
        time: f64,
        lower: f64,
        upper: f64,
        points: usize,
    ) -> SimulationResult<Vec<DensityPoint>> {
        if points < 2 {
            return Err(SimulationError::InvalidParameter {
                field: "points",
                constraint: "must be >= 2",
                value: points as f64,
            });
        }
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(SimulationError::InvalidParameter {
                field: "upper",
                constraint: "range bounds must be finite with lower < upper",
                value: upper,
            });
        }

        let spacing = (upper - lower) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = if i == points - 1 {
                    upper
                } else {
                    lower + i as f64 * spacing
                };
                Ok(DensityPoint {
                    x,
                    density: self.density(x, time)?,
                })
            })
            .collect()
    }

    /// Mean path and `mean ± multiplier·σ(t)` envelope over `time_grid`.
    ///
    /// # Errors
    /// `InvalidParameter` for a negative or non-finite multiplier or time point.
    fn sigma_band(&self, time_grid: &[f64], multiplier: f64) -> SimulationResult<SigmaBand> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(SimulationError::InvalidParameter {
                field: "multiplier",
                constraint: "must be finite and >= 0",
                value: multiplier,
            });
        }

        let mut band = SigmaBand {
            multiplier,
            times: time_grid.to_vec(),
            mean: Vec::with_capacity(time_grid.len()),
            lower: Vec::with_capacity(time_grid.len()),
            upper: Vec::with_capacity(time_grid.len()),
        };
        for &t in time_grid {
            let summary = self.moments(t)?;
            let half_width = multiplier * summary.std_dev();
            band.mean.push(summary.mean);
            band.lower.push(summary.mean - half_width);
            band.upper.push(summary.mean + half_width);
        }
        Ok(band)
    }
}
