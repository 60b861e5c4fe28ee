//! Benchmark driver: repeated split/dispatch/merge cycles over a fixed
//! list of concurrency levels, with wall-clock timing per level.

use crate::chunker::split_even;
use crate::config::WordFreqConfig;
use crate::error::Result;
use crate::executor::{Executor, ParallelExecutor};
use crate::merger::{merge, CorpusStats};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Timing of one benchmark iteration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimingRecord {
    /// Concurrency level (chunk/worker count) of the iteration
    pub concurrency: usize,
    /// Wall-clock duration of the full split+dispatch+merge span
    pub duration_ms: u64,
}

/// The artifact of a complete benchmark run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchmarkSummary {
    /// One timing record per configured level, in execution order
    pub timings: Vec<TimingRecord>,
    /// Merged statistics of the highest configured concurrency level
    pub stats: CorpusStats,
}

/// Run one split/dispatch/merge pass at a fixed concurrency level
pub fn analyze<E: Executor>(
    text: &str,
    min_len: usize,
    top_n: usize,
    concurrency: usize,
    executor: &E,
) -> Result<CorpusStats> {
    let chunks = split_even(text, concurrency)?;
    let partials = executor.dispatch(&chunks, min_len)?;
    Ok(merge(&partials, top_n))
}

/// Orchestrates the benchmark over all configured concurrency levels
///
/// Levels run strictly sequentially; one cycle completes before the next
/// starts. The first dispatch failure aborts the whole run; no level is
/// silently skipped.
#[derive(Debug)]
pub struct BenchmarkDriver<E: Executor> {
    config: WordFreqConfig,
    executor: E,
}

impl BenchmarkDriver<ParallelExecutor> {
    /// Create a driver with the default parallel executor
    pub fn new(config: WordFreqConfig) -> Result<Self> {
        Self::with_executor(config, ParallelExecutor)
    }
}

impl<E: Executor> BenchmarkDriver<E> {
    /// Create a driver with a custom dispatch strategy
    pub fn with_executor(config: WordFreqConfig, executor: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, executor })
    }

    /// The driver's configuration
    pub fn config(&self) -> &WordFreqConfig {
        &self.config
    }

    /// Run the full benchmark over `text`
    ///
    /// The retained statistics belong to the numerically highest level, not
    /// the last-executed one, so an unsorted level list still reports the
    /// most-parallel run.
    pub fn run(&self, text: &str) -> Result<BenchmarkSummary> {
        let max_level = self.config.max_level()?;
        let mut timings = Vec::with_capacity(self.config.levels.len());
        let mut final_stats = None;

        for &level in &self.config.levels {
            let started = Instant::now();
            let stats = analyze(
                text,
                self.config.min_len,
                self.config.top_n,
                level,
                &self.executor,
            )?;
            let duration_ms = started.elapsed().as_millis() as u64;

            timings.push(TimingRecord {
                concurrency: level,
                duration_ms,
            });
            if level == max_level {
                final_stats = Some(stats);
            }
        }

        // max_level is drawn from the same list the loop walked.
        let stats = final_stats.unwrap_or_else(CorpusStats::empty);
        Ok(BenchmarkSummary { timings, stats })
    }
}
