//! Integration tests for wordfreq-core

use proptest::prelude::*;
use wordfreq_core::*;

/// Executor whose workers always fail, for exercising the abort path
struct FailingExecutor;

impl Executor for FailingExecutor {
    fn dispatch(&self, _chunks: &[TextChunk<'_>], _min_len: usize) -> Result<Vec<ChunkStats>> {
        Err(CoreError::WorkerFailure {
            chunk_index: 0,
            reason: "injected failure".to_string(),
        })
    }
}

#[test]
fn worked_scenario_single_chunk() {
    let config = WordFreqConfig {
        min_len: 1,
        top_n: 2,
        levels: vec![1],
    };
    let summary = run_benchmark("a bb ccc bb a a", &config).unwrap();

    let stats = &summary.stats;
    assert_eq!(stats.total_words, 6);
    assert_eq!(stats.unique_words, 3);
    assert_eq!(stats.longest_word.as_deref(), Some("ccc"));
    assert_eq!(stats.shortest_word.as_deref(), Some("a"));
    assert_eq!(stats.top_words.len(), 2);
    assert_eq!(stats.top_words[0].word, "a");
    assert_eq!(stats.top_words[0].count, 3);
    assert_eq!(stats.top_words[1].word, "bb");
    assert_eq!(stats.top_words[1].count, 2);
}

#[test]
fn split_invariance_on_separator_aligned_corpus() {
    // Eight 3-letter words with a separator at every possible 4-way cut
    // point, so no word is damaged by any split tested here.
    let corpus = "abc def ghi jkl mno pqr stu vwx ";
    let baseline = analyze(corpus, 1, 10, 1, &SequentialExecutor).unwrap();

    for concurrency in 2..=8 {
        let stats = analyze(corpus, 1, 10, concurrency, &ParallelExecutor).unwrap();
        assert_eq!(stats.total_words, baseline.total_words);
        assert_eq!(stats.unique_words, baseline.unique_words);
        assert_eq!(stats.top_words, baseline.top_words);
    }
}

#[test]
fn empty_buffer_yields_zero_result() {
    let stats = analyze("", 1, 10, 4, &ParallelExecutor).unwrap();
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.unique_words, 0);
    assert!(stats.top_words.is_empty());
    assert_eq!(stats.longest_word, None);
    assert_eq!(stats.shortest_word, None);
}

#[test]
fn top_n_zero_yields_empty_top_words() {
    let stats = analyze("alpha beta alpha", 1, 0, 2, &ParallelExecutor).unwrap();
    assert!(stats.top_words.is_empty());
    assert_eq!(stats.total_words, 3);
}

#[test]
fn merge_is_idempotent() {
    let chunks = split_even("one two two three three three", 3).unwrap();
    let partials = SequentialExecutor.dispatch(&chunks, 1).unwrap();
    let first = merge(&partials, 5);
    let second = merge(&partials, 5);
    assert_eq!(first, second);
}

#[test]
fn failing_worker_aborts_the_benchmark() {
    let config = WordFreqConfig::default();
    let driver = BenchmarkDriver::with_executor(config, FailingExecutor).unwrap();

    let err = driver.run("some words here").unwrap_err();
    assert!(matches!(err, CoreError::WorkerFailure { chunk_index: 0, .. }));
}

#[test]
fn summary_serializes_with_original_field_names() {
    // Level 2 cuts "a bb ccc" between "bb" and " ccc", leaving words intact.
    let config = WordFreqConfig {
        levels: vec![1, 2],
        ..Default::default()
    };
    let summary = run_benchmark("a bb ccc", &config).unwrap();

    let stats_json = serde_json::to_string_pretty(&summary.stats).unwrap();
    assert!(stats_json.contains("\"totalWords\": 3"));
    assert!(stats_json.contains("\"shortestWord\": \"a\""));

    let timings_json = serde_json::to_string(&summary.timings).unwrap();
    assert!(timings_json.contains("\"concurrency\":1"));
    assert!(timings_json.contains("\"durationMs\""));
}

proptest! {
    #[test]
    fn chunks_always_reassemble_losslessly(text in "\\PC*", parts in 1usize..16) {
        let chunks = split_even(&text, parts).unwrap();
        prop_assert_eq!(chunks.len(), parts);
        let rebuilt: String = chunks.iter().map(|c| c.text).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn word_totals_survive_any_split_of_separated_words(
        words in prop::collection::vec("[a-z]{1,8}", 0..40),
        parts in 1usize..12,
    ) {
        let corpus = words.join(" ");
        let single = analyze(&corpus, 1, usize::MAX, 1, &SequentialExecutor).unwrap();
        let split = analyze(&corpus, 1, usize::MAX, parts, &ParallelExecutor).unwrap();

        // Positional splitting may cut a word in half; that is a documented
        // approximation, so totals are only required to match when every
        // internal chunk boundary lands next to a separator.
        let bytes = corpus.as_bytes();
        let chunks = split_even(&corpus, parts).unwrap();
        let undamaged = chunks.iter().skip(1).all(|c| {
            let p = c.start;
            p == 0 || p >= bytes.len() || bytes[p - 1] == b' ' || bytes[p] == b' '
        });
        if undamaged {
            prop_assert_eq!(split.total_words, single.total_words);
            prop_assert_eq!(split.unique_words, single.unique_words);
        }
    }
}
