//! Configuration types for the engine

use crate::error::{CoreError, Result};

/// Engine configuration
///
/// The caller is expected to run [`WordFreqConfig::validate`] (done by
/// [`BenchmarkDriver::new`](crate::BenchmarkDriver::new)) before handing the
/// configuration to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFreqConfig {
    /// Minimum token length; shorter tokens are discarded
    pub min_len: usize,
    /// Number of (word, count) pairs retained in the top-words list
    pub top_n: usize,
    /// Concurrency levels to benchmark, one split/dispatch/merge cycle each
    pub levels: Vec<usize>,
}

impl Default for WordFreqConfig {
    fn default() -> Self {
        Self {
            min_len: 1,
            top_n: 10,
            levels: vec![1, 4, 8],
        }
    }
}

impl WordFreqConfig {
    /// Validate the configuration, rejecting it before any work starts
    pub fn validate(&self) -> Result<()> {
        if self.min_len < 1 {
            return Err(CoreError::invalid_config("min_len must be at least 1"));
        }
        if self.levels.is_empty() {
            return Err(CoreError::invalid_config(
                "at least one concurrency level is required",
            ));
        }
        if self.levels.iter().any(|&l| l == 0) {
            return Err(CoreError::invalid_config(
                "concurrency levels must be positive",
            ));
        }
        Ok(())
    }

    /// The concurrency level whose merged statistics are retained
    ///
    /// "Final" means numerically highest, independent of list order.
    pub fn max_level(&self) -> Result<usize> {
        self.levels.iter().copied().max().ok_or_else(|| {
            CoreError::invalid_config("at least one concurrency level is required")
        })
    }
}
