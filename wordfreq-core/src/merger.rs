//! Reduction of per-chunk statistics into one global result
//!
//! Merging is single-threaded by design: workers keep their tables fully
//! local and the fold below runs over them in chunk-index order, which fixes
//! every tie-break deterministically.

use crate::counter::ChunkStats;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the top-words list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCount {
    /// The lowercase word
    pub word: String,
    /// Total occurrences across the corpus
    pub count: u64,
}

/// Fully merged, run-level statistics
///
/// Field names serialize in camelCase so the persisted artifact keeps the
/// established `stats.json` layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    /// Sum of qualifying tokens across all chunks
    pub total_words: u64,
    /// Number of distinct words in the merged frequency table
    pub unique_words: usize,
    /// Globally longest word, ties broken by chunk-index encounter order
    pub longest_word: Option<String>,
    /// Globally shortest word, ties broken by chunk-index encounter order
    pub shortest_word: Option<String>,
    /// Top words by count, descending, truncated to the configured N
    pub top_words: Vec<WordCount>,
}

impl CorpusStats {
    /// The zero-valued result of merging nothing (not an error)
    pub fn empty() -> Self {
        Self {
            total_words: 0,
            unique_words: 0,
            longest_word: None,
            shortest_word: None,
            top_words: Vec::new(),
        }
    }
}

/// Merge per-chunk statistics, given in chunk-index order, into one result
pub fn merge(partials: &[ChunkStats], top_n: usize) -> CorpusStats {
    let mut total_words = 0u64;
    let mut frequency: IndexMap<&str, u64> = IndexMap::new();
    let mut longest: Option<&str> = None;
    let mut shortest: Option<&str> = None;

    for partial in partials {
        total_words += partial.word_count;

        // Per-chunk tables iterate in first-encounter order, so the merged
        // table's insertion order is itself deterministic.
        for (word, count) in &partial.frequency {
            *frequency.entry(word.as_str()).or_insert(0) += count;
        }

        if let Some(candidate) = partial.longest.as_deref() {
            let improves = longest.map_or(true, |cur| candidate.len() > cur.len());
            if improves {
                longest = Some(candidate);
            }
        }
        if let Some(candidate) = partial.shortest.as_deref() {
            let improves = shortest.map_or(true, |cur| candidate.len() < cur.len());
            if improves {
                shortest = Some(candidate);
            }
        }
    }

    let unique_words = frequency.len();

    // Stable sort: equal counts keep their first-insertion order.
    let mut ranked: Vec<(&str, u64)> = frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let top_words = ranked
        .into_iter()
        .take(top_n)
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();

    CorpusStats {
        total_words,
        unique_words,
        longest_word: longest.map(str::to_string),
        shortest_word: shortest.map(str::to_string),
        top_words,
    }
}
