//! Dispatch strategies for per-chunk counting

use crate::chunker::TextChunk;
use crate::counter::ChunkStats;
use crate::error::Result;

pub mod parallel;
pub mod sequential;

pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// A strategy for running one counting pass per chunk
///
/// Implementations must return partial results in the same order as the
/// input chunks, whatever order the workers actually complete in, and must
/// fail the whole dispatch if any worker fails. No partial result list is
/// ever returned alongside an error.
pub trait Executor: Send + Sync {
    /// Count words in every chunk and collect the results in chunk order
    fn dispatch(&self, chunks: &[TextChunk<'_>], min_len: usize) -> Result<Vec<ChunkStats>>;
}
