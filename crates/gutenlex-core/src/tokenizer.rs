// ===== gutenlex/crates/gutenlex-core/src/tokenizer.rs =====
use fnv::FnvHashMap;

/// Word-frequency table for a single text.
///
/// Entries are kept in first-occurrence order, which is what the ranker's
/// stable sort leans on to break count ties.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: FnvHashMap<String, usize>,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl FrequencyTable {
    /// Counts words in `text`, case-folded.
    ///
    /// A token is a maximal run of word characters (letters, digits,
    /// underscore). Tokens shorter than `min_word_len` characters are
    /// dropped. The two call sites use different minimums (5 for bulk
    /// import, 1 for interactive fetch) and must stay independently
    /// configurable.
    pub fn from_text(text: &str, min_word_len: usize) -> Self {
        let mut table = Self::default();
        let lowered = text.to_lowercase();

        for token in lowered.split(|c: char| !is_word_char(c)) {
            if token.is_empty() || token.chars().count() < min_word_len {
                continue;
            }
            table.bump(token);
        }

        table
    }

    fn bump(&mut self, word: &str) {
        if let Some(&slot) = self.index.get(word) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), 1));
        }
    }

    pub fn count(&self, word: &str) -> u64 {
        self.index
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Distinct word count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }
}
