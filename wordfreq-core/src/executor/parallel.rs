//! Parallel dispatch strategy

use crate::chunker::TextChunk;
use crate::counter::{count_words, ChunkStats};
use crate::error::Result;
use crate::executor::Executor;
use rayon::prelude::*;

/// Multi-threaded executor, one rayon task per chunk
///
/// Workers share the corpus read-only and never communicate; `collect` over
/// the indexed parallel iterator restores chunk order regardless of
/// completion order, and the first worker error aborts the dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelExecutor;

impl Executor for ParallelExecutor {
    fn dispatch(&self, chunks: &[TextChunk<'_>], min_len: usize) -> Result<Vec<ChunkStats>> {
        chunks
            .par_iter()
            .map(|chunk| Ok(count_words(chunk.text, min_len)))
            .collect()
    }
}
