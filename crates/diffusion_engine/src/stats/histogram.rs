//! Equal-width histograms normalised to a probability density.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use diffusion_core::types::{SimulationError, SimulationResult};

/// Histogram over `[min, max]` of a sample, with bar heights scaled so the
/// total area is one.
///
/// The last bin is closed on the right so the sample maximum is counted.
///
/// # Examples
///
/// ```rust
/// use diffusion_engine::stats::Histogram;
///
/// let histogram = Histogram::density(&[0.0, 1.0, 1.0, 2.0], 2).unwrap();
/// assert_eq!(histogram.counts, vec![1, 3]);
/// assert_eq!(histogram.edges, vec![0.0, 1.0, 2.0]);
/// assert_eq!(histogram.area(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    /// Bin edges, `bins + 1` values.
    pub edges: Vec<f64>,
    /// Sample count per bin.
    pub counts: Vec<usize>,
    /// `count / (n · width)` per bin.
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Builds a density histogram with `bins` equal-width bins.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for `bins == 0`, an empty sample, or non-finite values
    /// - `DegenerateDistribution` when every sample is identical
    pub fn density(values: &[f64], bins: usize) -> SimulationResult<Self> {
        if bins == 0 {
            return Err(SimulationError::InvalidParameter {
                field: "bins",
                constraint: "must be >= 1",
                value: 0.0,
            });
        }
        if values.is_empty() {
            return Err(SimulationError::InvalidParameter {
                field: "values",
                constraint: "must contain at least one sample",
                value: 0.0,
            });
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(SimulationError::InvalidParameter {
                field: "values",
                constraint: "must be finite",
                value: bad,
            });
        }

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if min == max {
            return Err(SimulationError::DegenerateDistribution {
                reason: format!("all {} samples equal {}", values.len(), min),
            });
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            let index = (((v - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        let scale = 1.0 / (values.len() as f64 * width);
        let densities = counts.iter().map(|&c| c as f64 * scale).collect();
        let edges = (0..=bins)
            .map(|i| if i == bins { max } else { min + i as f64 * width })
            .collect();

        Ok(Self {
            edges,
            counts,
            densities,
        })
    }

    /// Number of bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Midpoint of every bin.
    pub fn centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// Total area under the bars; one up to rounding.
    pub fn area(&self) -> f64 {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .map(|(w, d)| (w[1] - w[0]) * d)
            .sum()
    }
}
