//! Empirical statistics of simulated batches.
//!
//! - `moments`: population mean/variance of samples and per-time ensemble statistics
//! - `compare`: terminal empirical moments against the closed-form law
//! - `histogram`: equal-width histogram normalised to a probability density
//!
//! # Variance Convention
//!
//! Sample variance is the **population** variance (divide by N), matching
//! the theoretical definition `Var[S_t] = σ²t` rather than the unbiased
//! estimator.

pub mod compare;
pub mod histogram;
pub mod moments;

pub use compare::{compare, compare_with_law, Comparison};
pub use histogram::Histogram;
pub use moments::{empirical_summary, ensemble_statistics};
