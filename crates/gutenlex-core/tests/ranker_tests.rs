// ===== gutenlex/crates/gutenlex-core/tests/ranker_tests.rs =====
use gutenlex_core::consts::TOP_K;
use gutenlex_core::ranker::top_words;
use gutenlex_core::tokenizer::FrequencyTable;

#[test]
fn ranks_descending_by_count() {
    let table = FrequencyTable::from_text("cat cat dog dog dog bird", 1);
    let ranked = top_words(&table, TOP_K);

    let counts: Vec<u64> = ranked.iter().map(|e| e.count).collect();
    assert_eq!(counts, [3, 2, 1]);
    assert_eq!(ranked[0].word, "dog");
    assert_eq!(ranked[1].word, "cat");
    assert_eq!(ranked[2].word, "bird");
}

#[test]
fn returns_all_entries_when_fewer_than_k() {
    let table = FrequencyTable::from_text("one two three", 1);
    assert_eq!(top_words(&table, TOP_K).len(), 3);
}

#[test]
fn truncates_to_k() {
    let text = "a b c d e f g h i j k l m n o p";
    let table = FrequencyTable::from_text(text, 1);
    let ranked = top_words(&table, TOP_K);
    assert_eq!(ranked.len(), TOP_K);
}

#[test]
fn ties_break_by_first_occurrence_order() {
    // All counts equal; rank order must be scan order.
    let table = FrequencyTable::from_text("zulu yankee xray whiskey", 1);
    let ranked = top_words(&table, TOP_K);
    let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, ["zulu", "yankee", "xray", "whiskey"]);
}

#[test]
fn ties_interleave_with_higher_counts_correctly() {
    // beta and delta tie at 2; beta appears first in the scan.
    let table = FrequencyTable::from_text("alpha alpha alpha beta delta beta delta gamma", 1);
    let ranked = top_words(&table, TOP_K);
    let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, ["alpha", "beta", "delta", "gamma"]);
}

#[test]
fn empty_table_ranks_to_nothing() {
    let table = FrequencyTable::from_text("", 1);
    assert!(top_words(&table, TOP_K).is_empty());
}
