// ===== gutenlex/crates/gutenlex-core/src/format.rs =====
use crate::ranker::RankedWord;

/// Renders ranked entries as the persisted blob: one `"word: count"` line
/// per entry, joined by a single newline, no trailing newline.
pub fn format_frequencies(ranked: &[RankedWord]) -> String {
    ranked
        .iter()
        .map(|e| format!("{}: {}", e.word, e.count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses a persisted blob back into ranked entries.
///
/// Returns `None` if any line is not in `"word: count"` form. The empty
/// blob parses to an empty sequence.
pub fn parse_frequencies(blob: &str) -> Option<Vec<RankedWord>> {
    if blob.is_empty() {
        return Some(Vec::new());
    }

    blob.lines()
        .map(|line| {
            let (word, count) = line.split_once(": ")?;
            Some(RankedWord {
                word: word.to_string(),
                count: count.parse().ok()?,
            })
        })
        .collect()
}

/// Wraps a stored blob with the display header. The blob lines themselves
/// pass through untouched.
pub fn display_with_header(title: &str, blob: &str) -> String {
    format!(
        "** These are the 10 most common words for '{}' **\n\n{}",
        title, blob
    )
}
