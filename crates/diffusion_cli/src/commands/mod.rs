//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! primary output to the supplied writer; progress goes to the log.

pub mod bands;
pub mod check;
pub mod density;
pub mod simulate;
