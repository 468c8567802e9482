//! Numerical building blocks.
//!
//! - `distributions`: standard and shifted normal density/CDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf, normal_cdf, normal_pdf};
