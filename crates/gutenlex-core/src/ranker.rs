// ===== gutenlex/crates/gutenlex-core/src/ranker.rs =====
use crate::tokenizer::FrequencyTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub count: u64,
}

/// Returns the `k` highest-count words, descending.
///
/// The sort is stable over the table's first-occurrence order, so equal
/// counts rank in the order the words first appeared in the text.
pub fn top_words(table: &FrequencyTable, k: usize) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = table
        .iter()
        .map(|(word, count)| RankedWord {
            word: word.to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(k);
    ranked
}
