//! Plain-text rendering of corpus statistics

use wordfreq_core::CorpusStats;

/// Render statistics as a human-readable summary with a top-words table
pub fn render_stats(stats: &CorpusStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total words:   {}\n", stats.total_words));
    out.push_str(&format!("Unique words:  {}\n", stats.unique_words));
    out.push_str(&format!(
        "Longest word:  {}\n",
        stats.longest_word.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Shortest word: {}\n",
        stats.shortest_word.as_deref().unwrap_or("-")
    ));

    if !stats.top_words.is_empty() {
        let width = stats
            .top_words
            .iter()
            .map(|w| w.word.len())
            .max()
            .unwrap_or(0)
            .max("word".len());

        out.push('\n');
        out.push_str(&format!("{:<width$}  count\n", "word"));
        for entry in &stats.top_words {
            out.push_str(&format!("{:<width$}  {}\n", entry.word, entry.count));
        }
    }

    out
}
