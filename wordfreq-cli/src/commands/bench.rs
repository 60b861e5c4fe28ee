//! Bench command implementation

use crate::commands::init_logging;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{json, text};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordfreq_core::{run_benchmark, WordFreqConfig};

/// Arguments for the bench command
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Corpus file to analyze
    #[arg(short, long, value_name = "FILE", required = true)]
    pub file: PathBuf,

    /// Minimum word length to count
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub min_len: usize,

    /// Number of top words to report
    #[arg(short = 't', long = "top", value_name = "N", default_value_t = 10)]
    pub top_n: usize,

    /// Concurrency levels to benchmark, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![1, 4, 8])]
    pub levels: Vec<usize>,

    /// Output file for the merged statistics
    #[arg(long, value_name = "FILE", default_value = "output/stats.json")]
    pub stats_out: PathBuf,

    /// Output file for the per-level timing log
    #[arg(long, value_name = "FILE", default_value = "logs/perf-summary.json")]
    pub timings_out: PathBuf,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl BenchArgs {
    /// Execute the bench command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose)?;

        if !self.file.exists() {
            return Err(CliError::FileNotFound(self.file.display().to_string()).into());
        }

        log::info!(
            "Benchmarking {} ({} bytes) at levels {:?}",
            self.file.display(),
            FileReader::file_size(&self.file)?,
            self.levels
        );
        let corpus = FileReader::read_text(&self.file)?;

        let config = WordFreqConfig {
            min_len: self.min_len,
            top_n: self.top_n,
            levels: self.levels.clone(),
        };
        let summary = run_benchmark(&corpus, &config)?;

        for timing in &summary.timings {
            println!(
                "  Concurrency {} done in {} ms",
                timing.concurrency, timing.duration_ms
            );
        }

        json::write_stats(&self.stats_out, &summary.stats)?;
        json::write_timings(&self.timings_out, &summary.timings)?;

        println!();
        println!("Final stats saved to {}", self.stats_out.display());
        println!("Benchmark log saved to {}", self.timings_out.display());
        println!();
        print!("{}", text::render_stats(&summary.stats));

        Ok(())
    }
}
