//! Sequential dispatch strategy

use crate::chunker::TextChunk;
use crate::counter::{count_words, ChunkStats};
use crate::error::Result;
use crate::executor::Executor;

/// Single-threaded executor, useful as a baseline and in tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn dispatch(&self, chunks: &[TextChunk<'_>], min_len: usize) -> Result<Vec<ChunkStats>> {
        chunks
            .iter()
            .map(|chunk| Ok(count_words(chunk.text, min_len)))
            .collect()
    }
}
