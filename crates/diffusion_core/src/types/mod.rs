//! Parameter, summary and error types shared by every layer.
//!
//! This module provides:
//! - `params`: `SimulationParameters` and its builder
//! - `summary`: `DistributionSummary` (mean and variance value type)
//! - `error`: `SimulationError`, the single error channel of the workspace
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod params;
pub mod summary;

pub use error::{SimulationError, SimulationResult};
pub use params::{SimulationParameters, SimulationParametersBuilder};
pub use summary::{DistributionSummary, RelativeError};
