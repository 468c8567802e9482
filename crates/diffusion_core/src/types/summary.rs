//! Mean/variance summary of a one-dimensional distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean and variance of a distribution.
///
/// Either computed in closed form or reduced from simulated samples; the
/// variance convention for samples is the population variance (divide by N).
///
/// # Examples
///
/// ```rust
/// use diffusion_core::types::DistributionSummary;
///
/// let summary = DistributionSummary::new(100.0, 400.0);
/// assert_eq!(summary.std_dev(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistributionSummary {
    /// Expected value.
    pub mean: f64,
    /// Variance.
    pub variance: f64,
}

/// Percentage deviation of one summary from a reference.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelativeError {
    /// `(mean - ref.mean) / ref.mean * 100`, or 0 for a zero reference mean.
    pub mean_pct: f64,
    /// `(variance - ref.variance) / ref.variance * 100`, or 0 for a zero reference variance.
    pub variance_pct: f64,
}

impl DistributionSummary {
    /// Creates a summary from mean and variance.
    #[inline]
    pub fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }

    /// Standard deviation, `sqrt(variance)`.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Percentage errors of `self` against `reference`.
    ///
    /// A zero reference component yields 0 for that component instead of
    /// an infinite or NaN percentage.
    pub fn relative_error(&self, reference: &DistributionSummary) -> RelativeError {
        RelativeError {
            mean_pct: pct(self.mean, reference.mean),
            variance_pct: pct(self.variance, reference.variance),
        }
    }
}

#[inline]
fn pct(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        0.0
    } else {
        (value - reference) / reference * 100.0
    }
}
