//! Parallel word-frequency aggregation
//!
//! This crate splits a corpus into contiguous chunks, counts words per chunk
//! under concurrent execution, and deterministically merges the partial
//! tables into one global statistic. A benchmark driver re-runs the pipeline
//! at a configured list of concurrency levels and reports per-level timings.

#![warn(missing_docs)]

pub mod benchmark;
pub mod chunker;
pub mod config;
pub mod counter;
pub mod error;
pub mod executor;
pub mod merger;

// Re-export key types
pub use benchmark::{analyze, BenchmarkDriver, BenchmarkSummary, TimingRecord};
pub use chunker::{split_even, TextChunk};
pub use config::WordFreqConfig;
pub use counter::{count_words, ChunkStats};
pub use error::{CoreError, Result};
pub use executor::{Executor, ParallelExecutor, SequentialExecutor};
pub use merger::{merge, CorpusStats, WordCount};

/// Run the full benchmark with the default parallel executor
///
/// Convenience entry point: validates `config`, runs one split/dispatch/
/// merge cycle per configured level, and returns the timing log together
/// with the statistics of the highest level.
pub fn run_benchmark(text: &str, config: &WordFreqConfig) -> Result<BenchmarkSummary> {
    BenchmarkDriver::new(config.clone())?.run(text)
}
