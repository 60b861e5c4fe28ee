//! Positional text chunking
//!
//! Splitting is purely positional: a word straddling a chunk boundary is
//! counted as two fragments. This is an accepted approximation of the
//! chunking strategy, not a defect to compensate for with overlap.

use crate::error::{CoreError, Result};

/// A contiguous slice of the corpus assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunk<'a> {
    /// The chunk content, borrowed from the shared corpus buffer
    pub text: &'a str,
    /// Byte offset of the chunk in the original buffer
    pub start: usize,
}

impl TextChunk<'_> {
    /// Byte length of the chunk
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the chunk holds no bytes
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split `text` into exactly `parts` contiguous chunks
///
/// Chunks are sized `ceil(len / parts)`; when the buffer runs out early the
/// trailing chunks are empty, so the chunk count always equals the requested
/// concurrency level. Nominal cut points falling inside a multi-byte
/// character are nudged forward to the next character boundary, so chunk
/// sizes can differ slightly from nominal but the chunks always concatenate
/// back to the original buffer.
pub fn split_even(text: &str, parts: usize) -> Result<Vec<TextChunk<'_>>> {
    if parts == 0 {
        return Err(CoreError::invalid_config("chunk count must be positive"));
    }

    let len = text.len();
    let size = len.div_ceil(parts);
    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;

    for i in 0..parts {
        let mut end = if i + 1 == parts {
            // The last chunk absorbs whatever boundary adjustment left over.
            len
        } else {
            (start + size).min(len)
        };
        while end < len && !text.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(TextChunk {
            text: &text[start..end],
            start,
        });
        start = end;
    }

    debug_assert_eq!(start, len);
    Ok(chunks)
}
