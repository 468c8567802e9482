//! Path generation for arithmetic Brownian motion.
//!
//! # Architecture
//!
//! ```text
//! simulate(params)
//! ├── SimulationParameters::validate()   (InvalidParameter, before any allocation)
//! ├── MatrixLayout::new()                (ResourceExhausted on overflow / limit)
//! ├── SimRng::fill_normal()              (one stream, row-major, path × step)
//! └── rayon par_chunks_mut               (per-path prefix sum of increments)
//! ```
//!
//! # Memory Layout
//!
//! Values are stored row-major: `values[path_idx * (n_steps + 1) + step_idx]`,
//! with `step_idx = 0` holding the initial value.

pub mod layout;
pub mod paths;

pub use layout::{MatrixLayout, MAX_MATRIX_ELEMENTS};
pub use paths::{simulate, simulate_with_rng, PathBatch};
