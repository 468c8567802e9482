//! # diffusion_core: Foundation types for the Bachelier diffusion simulator
//!
//! ## Foundation Role
//!
//! diffusion_core is the bottom layer of the workspace, providing:
//! - Model parameters with validation: `SimulationParameters` (`types::params`)
//! - Mean/variance value type: `DistributionSummary` (`types::summary`)
//! - Error types: `SimulationError` (`types::error`)
//! - Standard normal density and CDF (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other diffusion_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use diffusion_core::types::{SimulationError, SimulationParameters};
//!
//! let params = SimulationParameters::builder()
//!     .initial_value(100.0)
//!     .volatility(20.0)
//!     .horizon(1.0)
//!     .step_size(0.01)
//!     .path_count(1_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.step_count(), 100);
//!
//! let bad = SimulationParameters::builder().step_size(0.0).build();
//! assert!(matches!(
//!     bad,
//!     Err(SimulationError::InvalidParameter { field: "step_size", .. })
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameters and summaries

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
