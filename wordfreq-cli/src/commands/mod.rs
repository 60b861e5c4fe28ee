//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod bench;
pub mod generate;
pub mod stats;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Benchmark the aggregation pipeline across concurrency levels
    Bench(bench::BenchArgs),

    /// Compute word statistics for a corpus in a single pass
    Stats(stats::StatsArgs),

    /// Generate a random-word test corpus
    Generate(generate::GenerateArgs),
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) -> Result<()> {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    Ok(())
}
