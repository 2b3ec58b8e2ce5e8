//! CLI subcommand implementations.

pub mod calculate;
pub mod coefficients;
mod util;
