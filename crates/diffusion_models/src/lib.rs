//! # Diffusion Models (closed form)
//!
//! Theoretical marginal laws used as ground truth for simulated paths.
//!
//! This crate provides:
//! - [`analytical::ArithmeticBrownianMotion`]: Gaussian marginal of `dS = μ dt + σ dW`
//! - [`analytical::MarginalLaw`]: trait over closed-form time-t marginals
//! - Free functions [`analytical::moments`] and [`analytical::density`]
//!
//! ## Design Principles
//!
//! - **Leaf component**: no dependency on the simulation engine
//! - **Explicit degeneracy**: a point-mass law reports
//!   `SimulationError::DegenerateDistribution` instead of NaN or zeros

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
