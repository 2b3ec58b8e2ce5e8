//! Bedtime calculator CLI library.
//!
//! This crate provides the CLI interface for the bedtime calculator.

mod cli;
pub mod commands;
mod config;

pub use cli::{CalculateArgs, Cli, Commands};
pub use config::Config;
