//! wordfreq CLI library
//!
//! Command-line wrapper around the wordfreq-core aggregation engine:
//! corpus generation, file loading, and JSON persistence of results.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
