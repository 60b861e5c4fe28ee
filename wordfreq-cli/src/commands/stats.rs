//! Stats command implementation

use crate::commands::init_logging;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{json, text};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordfreq_core::{analyze, ParallelExecutor};

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Corpus file to analyze
    #[arg(short, long, value_name = "FILE", required = true)]
    pub file: PathBuf,

    /// Minimum word length to count
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub min_len: usize,

    /// Number of top words to report
    #[arg(short = 't', long = "top", value_name = "N", default_value_t = 10)]
    pub top_n: usize,

    /// Number of chunks/workers for the single pass
    #[arg(short, long, value_name = "N", default_value_t = 8)]
    pub concurrency: usize,

    /// Write statistics as JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose)?;

        if !self.file.exists() {
            return Err(CliError::FileNotFound(self.file.display().to_string()).into());
        }
        if self.concurrency == 0 {
            return Err(
                CliError::InvalidArgument("concurrency must be positive".to_string()).into(),
            );
        }

        log::info!(
            "Analyzing {} with {} workers",
            self.file.display(),
            self.concurrency
        );
        let corpus = FileReader::read_text(&self.file)?;
        let stats = analyze(
            &corpus,
            self.min_len.max(1),
            self.top_n,
            self.concurrency,
            &ParallelExecutor,
        )?;

        match &self.output {
            Some(path) => {
                json::write_stats(path, &stats)?;
                println!("Stats saved to {}", path.display());
            }
            None => print!("{}", text::render_stats(&stats)),
        }

        Ok(())
    }
}
