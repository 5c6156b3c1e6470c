//! Command-line interface for exploring a phone backup.

pub mod commands;

pub use commands::{Cli, Commands, run};
