//! Error types for simulation and closed-form operations.
//!
//! This module provides:
//! - `SimulationError`: every failure reported by the workspace
//! - `SimulationResult`: `Result` alias using `SimulationError`

use thiserror::Error;

/// Result alias for simulation and model operations.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Categorised simulation errors.
///
/// All errors are reported synchronously; none are retried internally.
///
/// # Variants
/// - `InvalidParameter`: Malformed or out-of-domain input
/// - `ResourceExhausted`: Requested path matrix too large to allocate
/// - `DegenerateDistribution`: Density queried where the law is a point mass
///
/// # Examples
/// ```
/// use diffusion_core::types::SimulationError;
///
/// let err = SimulationError::InvalidParameter {
///     field: "step_size",
///     constraint: "must be > 0",
///     value: 0.0,
/// };
/// assert_eq!(format!("{}", err), "Invalid parameter 'step_size' = 0: must be > 0");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// A parameter violates its domain constraint.
    #[error("Invalid parameter '{field}' = {value}: {constraint}")]
    InvalidParameter {
        /// Name of the offending field
        field: &'static str,
        /// Constraint that was violated
        constraint: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The path matrix cannot be allocated.
    #[error("Resource exhausted: cannot allocate {path_count} paths x {step_count} steps")]
    ResourceExhausted {
        /// Requested number of paths
        path_count: usize,
        /// Requested number of steps
        step_count: usize,
    },

    /// The distribution is a point mass and has no finite density.
    #[error("Degenerate distribution: {reason}")]
    DegenerateDistribution {
        /// Why the distribution is degenerate
        reason: String,
    },
}

impl SimulationError {
    /// Returns the offending field name for `InvalidParameter`, `None` otherwise.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}
