//! Arithmetic Brownian motion simulation parameters.
//!
//! The process simulated throughout the workspace is
//! ```text
//! dS = μ dt + σ dW
//! ```
//! discretised on `[0, T]` with a fixed step `dt`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{SimulationError, SimulationResult};

/// Parameters of one simulation run.
///
/// Plain value type; call [`validate`](Self::validate) (or build through
/// [`SimulationParametersBuilder`]) before use. Every consumer in the
/// workspace validates again on entry.
///
/// # Examples
///
/// ```rust
/// use diffusion_core::types::SimulationParameters;
///
/// let params = SimulationParameters {
///     initial_value: 100.0,
///     drift: 10.0,
///     volatility: 20.0,
///     horizon: 1.0,
///     step_size: 0.01,
///     path_count: 10_000,
///     seed: Some(42),
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.step_count(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationParameters {
    /// Initial value (S₀).
    pub initial_value: f64,
    /// Drift per unit time (μ).
    pub drift: f64,
    /// Volatility per square-root unit time (σ), non-negative.
    pub volatility: f64,
    /// Simulation horizon (T), positive.
    pub horizon: f64,
    /// Time step (dt), positive and not larger than the horizon.
    pub step_size: f64,
    /// Number of independent paths, at least one.
    pub path_count: usize,
    /// Seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl SimulationParameters {
    /// Creates a new parameter builder pre-loaded with defaults.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Number of time intervals: `round(horizon / step_size)`.
    ///
    /// Only meaningful for validated parameters, where it is at least one.
    #[inline]
    pub fn step_count(&self) -> usize {
        (self.horizon / self.step_size).round() as usize
    }

    /// Validates every field against its domain.
    ///
    /// Checks run in declaration order and the first violation is reported.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` naming the offending field if:
    /// - any float is NaN or infinite
    /// - `horizon <= 0`
    /// - `step_size <= 0` or `step_size > horizon`
    /// - `volatility < 0`
    /// - `path_count < 1`
    pub fn validate(&self) -> SimulationResult<()> {
        ensure(
            "initial_value",
            self.initial_value,
            self.initial_value.is_finite(),
            "must be finite",
        )?;
        ensure("drift", self.drift, self.drift.is_finite(), "must be finite")?;
        ensure(
            "volatility",
            self.volatility,
            self.volatility.is_finite() && self.volatility >= 0.0,
            "must be finite and >= 0",
        )?;
        ensure(
            "horizon",
            self.horizon,
            self.horizon.is_finite() && self.horizon > 0.0,
            "must be finite and > 0",
        )?;
        ensure(
            "step_size",
            self.step_size,
            self.step_size.is_finite() && self.step_size > 0.0,
            "must be finite and > 0",
        )?;
        ensure(
            "step_size",
            self.step_size,
            self.step_size <= self.horizon,
            "must be <= horizon",
        )?;
        ensure(
            "path_count",
            self.path_count as f64,
            self.path_count >= 1,
            "must be >= 1",
        )?;
        Ok(())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_value: 100.0,
            drift: 0.0,
            volatility: 20.0,
            horizon: 1.0,
            step_size: 0.01,
            path_count: 100,
            seed: Some(42),
        }
    }
}

#[inline]
fn ensure(field: &'static str, value: f64, ok: bool, constraint: &'static str) -> SimulationResult<()> {
    if ok {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            field,
            constraint,
            value,
        })
    }
}

/// Builder for [`SimulationParameters`].
///
/// Starts from [`SimulationParameters::default`] and validates at build time.
/// Disabling drift keeps the configured magnitude but builds with zero
/// effective drift.
///
/// # Examples
///
/// ```rust
/// use diffusion_core::types::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .drift(10.0)
///     .drift_enabled(false)
///     .path_count(500)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.drift, 0.0);
/// assert_eq!(params.path_count, 500);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationParametersBuilder {
    params: SimulationParameters,
    drift_enabled: bool,
}

impl Default for SimulationParametersBuilder {
    fn default() -> Self {
        Self {
            params: SimulationParameters::default(),
            drift_enabled: true,
        }
    }
}

impl SimulationParametersBuilder {
    /// Sets the initial value (S₀).
    #[inline]
    pub fn initial_value(mut self, initial_value: f64) -> Self {
        self.params.initial_value = initial_value;
        self
    }

    /// Sets the drift magnitude (μ).
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.params.drift = drift;
        self
    }

    /// Enables or disables the drift term.
    #[inline]
    pub fn drift_enabled(mut self, enabled: bool) -> Self {
        self.drift_enabled = enabled;
        self
    }

    /// Sets the volatility (σ).
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.params.volatility = volatility;
        self
    }

    /// Sets the horizon (T).
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.params.horizon = horizon;
        self
    }

    /// Sets the time step (dt).
    #[inline]
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.params.step_size = step_size;
        self
    }

    /// Sets the number of paths.
    #[inline]
    pub fn path_count(mut self, path_count: usize) -> Self {
        self.params.path_count = path_count;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.params.seed = seed;
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` as described in
    /// [`SimulationParameters::validate`].
    pub fn build(self) -> SimulationResult<SimulationParameters> {
        let mut params = self.params;
        if !self.drift_enabled {
            params.drift = 0.0;
        }
        params.validate()?;
        Ok(params)
    }
}
