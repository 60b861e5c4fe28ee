//! Per-chunk tokenization and counting

use indexmap::IndexMap;

/// Word statistics for a single chunk, prior to merging
///
/// `frequency` preserves first-encounter order, which is what makes the
/// merger's tie-breaking deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Number of tokens that met the minimum-length filter
    pub word_count: u64,
    /// Occurrence count per lowercase word, in first-encounter order
    pub frequency: IndexMap<String, u64>,
    /// First word of maximal length seen in the chunk
    pub longest: Option<String>,
    /// First word of minimal length seen in the chunk
    pub shortest: Option<String>,
}

/// Count words in one chunk of text
///
/// A token is a maximal run of ASCII letters, lowercased; every other byte
/// is a separator and consecutive separators collapse. Tokens shorter than
/// `min_len` are discarded. Longest/shortest keep the first token that
/// reached the current extremum, so later equal-length tokens never replace
/// them. `min_len` is clamped to 1; the function is total and never fails.
pub fn count_words(text: &str, min_len: usize) -> ChunkStats {
    let min_len = min_len.max(1);
    let mut stats = ChunkStats::default();
    let mut token = String::new();

    for &byte in text.as_bytes() {
        if byte.is_ascii_alphabetic() {
            token.push(byte.to_ascii_lowercase() as char);
        } else if !token.is_empty() {
            record_token(&mut stats, &token, min_len);
            token.clear();
        }
    }
    if !token.is_empty() {
        record_token(&mut stats, &token, min_len);
    }

    stats
}

fn record_token(stats: &mut ChunkStats, token: &str, min_len: usize) {
    if token.len() < min_len {
        return;
    }
    stats.word_count += 1;

    if let Some(count) = stats.frequency.get_mut(token) {
        *count += 1;
        // A repeat occurrence can never strictly improve either extremum.
        return;
    }
    stats.frequency.insert(token.to_string(), 1);

    let longer = stats
        .longest
        .as_ref()
        .map_or(true, |current| token.len() > current.len());
    if longer {
        stats.longest = Some(token.to_string());
    }
    let shorter = stats
        .shortest
        .as_ref()
        .map_or(true, |current| token.len() < current.len());
    if shorter {
        stats.shortest = Some(token.to_string());
    }
}
