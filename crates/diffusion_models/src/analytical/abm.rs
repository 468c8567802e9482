//! Arithmetic Brownian motion (Bachelier dynamics).
//!
//! The process `dS = μ dt + σ dW` started at `S₀` has the Gaussian marginal
//!
//! ```text
//! S_t ~ N(S₀ + μt, σ²t)
//! ```
//!
//! At `t = 0` or with `σ = 0` the marginal is a point mass at `S₀ + μt`; the
//! moments stay well defined but density and CDF are reported as
//! `SimulationError::DegenerateDistribution`.

use diffusion_core::math::{normal_cdf, normal_pdf};
use diffusion_core::types::{
    DistributionSummary, SimulationError, SimulationParameters, SimulationResult,
};

use super::law::MarginalLaw;

/// Closed-form marginal law of an arithmetic Brownian motion.
///
/// # Examples
/// ```
/// use diffusion_models::analytical::{ArithmeticBrownianMotion, MarginalLaw};
///
/// let abm = ArithmeticBrownianMotion::new(100.0, 10.0, 20.0).unwrap();
/// let summary = abm.moments(1.0).unwrap();
/// assert_eq!(summary.mean, 110.0);
/// assert_eq!(summary.variance, 400.0);
///
/// // Point mass at t = 0
/// assert!(abm.density(100.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArithmeticBrownianMotion {
    initial_value: f64,
    drift: f64,
    volatility: f64,
}

impl ArithmeticBrownianMotion {
    /// Creates the law from its three parameters.
    ///
    /// # Errors
    /// `InvalidParameter` for non-finite inputs or negative volatility.
    pub fn new(initial_value: f64, drift: f64, volatility: f64) -> SimulationResult<Self> {
        if !initial_value.is_finite() {
            return Err(SimulationError::InvalidParameter {
                field: "initial_value",
                constraint: "must be finite",
                value: initial_value,
            });
        }
        if !drift.is_finite() {
            return Err(SimulationError::InvalidParameter {
                field: "drift",
                constraint: "must be finite",
                value: drift,
            });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(SimulationError::InvalidParameter {
                field: "volatility",
                constraint: "must be finite and >= 0",
                value: volatility,
            });
        }
        Ok(Self {
            initial_value,
            drift,
            volatility,
        })
    }

    /// Creates the law from simulation parameters, ignoring the grid and path count.
    pub fn from_params(params: &SimulationParameters) -> SimulationResult<Self> {
        Self::new(params.initial_value, params.drift, params.volatility)
    }

    /// Returns S₀.
    #[inline]
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Returns μ.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Returns σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    #[inline]
    fn check_time(time: f64) -> SimulationResult<()> {
        if time.is_finite() && time >= 0.0 {
            Ok(())
        } else {
            Err(SimulationError::InvalidParameter {
                field: "time",
                constraint: "must be finite and >= 0",
                value: time,
            })
        }
    }

    /// Mean and standard deviation of a non-degenerate marginal.
    fn gaussian(&self, x: f64, time: f64) -> SimulationResult<(f64, f64)> {
        if x.is_nan() {
            return Err(SimulationError::InvalidParameter {
                field: "x",
                constraint: "must not be NaN",
                value: x,
            });
        }
        if !time.is_finite() {
            return Err(SimulationError::InvalidParameter {
                field: "time",
                constraint: "must be finite",
                value: time,
            });
        }
        if time <= 0.0 {
            return Err(SimulationError::DegenerateDistribution {
                reason: format!("point mass at t = {}", time),
            });
        }
        if self.volatility == 0.0 {
            return Err(SimulationError::DegenerateDistribution {
                reason: "point mass for zero volatility".to_string(),
            });
        }
        let mean = self.initial_value + self.drift * time;
        let std_dev = self.volatility * time.sqrt();
        Ok((mean, std_dev))
    }
}

impl MarginalLaw for ArithmeticBrownianMotion {
    /// Mean `S₀ + μt` and variance `σ²t`; `t = 0` gives variance 0.
    fn moments(&self, time: f64) -> SimulationResult<DistributionSummary> {
        Self::check_time(time)?;
        Ok(DistributionSummary {
            mean: self.initial_value + self.drift * time,
            variance: self.volatility * self.volatility * time,
        })
    }

    fn density(&self, x: f64, time: f64) -> SimulationResult<f64> {
        let (mean, std_dev) = self.gaussian(x, time)?;
        Ok(normal_pdf(x, mean, std_dev))
    }

    fn cdf(&self, x: f64, time: f64) -> SimulationResult<f64> {
        let (mean, std_dev) = self.gaussian(x, time)?;
        Ok(normal_cdf(x, mean, std_dev))
    }
}

/// Theoretical mean and variance of `S_time` for the given parameters.
///
/// # Examples
/// ```
/// use diffusion_core::types::SimulationParameters;
/// use diffusion_models::analytical::moments;
///
/// let params = SimulationParameters::default();
/// let summary = moments(&params, 0.0).unwrap();
/// assert_eq!(summary.mean, params.initial_value);
/// assert_eq!(summary.variance, 0.0);
/// ```
pub fn moments(params: &SimulationParameters, time: f64) -> SimulationResult<DistributionSummary> {
    ArithmeticBrownianMotion::from_params(params)?.moments(time)
}

/// Theoretical density of `S_time` at `x` for the given parameters.
///
/// # Errors
/// `DegenerateDistribution` for `time <= 0` or zero volatility.
pub fn density(x: f64, params: &SimulationParameters, time: f64) -> SimulationResult<f64> {
    ArithmeticBrownianMotion::from_params(params)?.density(x, time)
}
