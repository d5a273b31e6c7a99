//! Command-line interface module.
//!
//! This module provides the flag definitions and the run handler for the herald binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_broadcast;
