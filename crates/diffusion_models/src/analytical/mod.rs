//! Closed-form marginal distributions.
//!
//! - `abm`: arithmetic Brownian motion (Bachelier dynamics)
//! - `law`: the `MarginalLaw` trait and derived curves

pub mod abm;
pub mod law;

pub use abm::{density, moments, ArithmeticBrownianMotion};
pub use law::{DensityPoint, MarginalLaw, SigmaBand};
