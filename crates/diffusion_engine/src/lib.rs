//! # Diffusion Engine (simulation + statistics)
//!
//! ## Role
//!
//! diffusion_engine generates batches of arithmetic Brownian motion paths and
//! reduces them to empirical statistics for comparison with the closed-form
//! law in `diffusion_models`:
//! - [`rng`]: owned, seedable ChaCha20 random source
//! - [`mc`]: path generation (`simulate`) and the immutable [`mc::PathBatch`]
//! - [`stats`]: empirical moments, per-time ensemble statistics, histograms,
//!   and the empirical/theoretical [`stats::Comparison`]
//!
//! ## Determinism
//!
//! The whole `path_count × step_count` variate matrix is drawn from one RNG
//! stream before any parallel work starts. Rayon only runs per-path prefix
//! sums and per-column reductions, so a seeded batch is bitwise identical
//! for every thread count.
//!
//! ## Usage Example
//!
//! ```rust
//! use diffusion_core::types::SimulationParameters;
//! use diffusion_engine::mc::simulate;
//! use diffusion_engine::stats::compare;
//!
//! let params = SimulationParameters::builder()
//!     .path_count(2_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let batch = simulate(&params).unwrap();
//! assert_eq!(batch.time_grid().len(), params.step_count() + 1);
//!
//! let comparison = compare(&batch, &params).unwrap();
//! assert_eq!(comparison.theoretical.mean, 100.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
pub mod stats;

/// Convenient imports for callers.
pub mod prelude {
    pub use crate::mc::{simulate, simulate_with_rng, PathBatch};
    pub use crate::rng::SimRng;
    pub use crate::stats::{compare, empirical_summary, ensemble_statistics, Comparison, Histogram};
    pub use diffusion_core::types::{DistributionSummary, SimulationError, SimulationParameters};
}
