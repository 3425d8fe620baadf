// ===== gutenlex/crates/gutenlex-core/src/importer.rs =====
use crate::config::Seed;
use crate::consts::{
    BULK_FETCH_TIMEOUT_SECS, BULK_MIN_WORD_LEN, INTERACTIVE_FETCH_TIMEOUT_SECS,
    INTERACTIVE_MIN_WORD_LEN, TOP_K,
};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::format::format_frequencies;
use crate::ranker::top_words;
use crate::store::{InsertOutcome, Store};
use crate::tokenizer::FrequencyTable;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Added,
    Skipped,
    Failed(String),
}

/// Per-item results of one bulk import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub items: Vec<(String, ItemOutcome)>,
}

impl ImportReport {
    pub fn added(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Added))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Runs the bulk import pipeline over the seed list, strictly sequentially.
///
/// Per seed: fetch (20s timeout) -> count (min word length 5) -> top 10 ->
/// format -> insert-if-absent. A failure on one seed is logged with its
/// title and never aborts the rest of the batch. No retries.
pub async fn run_import(store: &Store, fetcher: &Fetcher, seeds: &[Seed]) -> ImportReport {
    let mut report = ImportReport::default();

    for seed in seeds {
        info!("📚 Fetching '{}'...", seed.title);

        let outcome = match import_one(store, fetcher, seed).await {
            Ok(InsertOutcome::Inserted) => {
                info!("✅ '{}' added to the database.", seed.title);
                ItemOutcome::Added
            }
            Ok(InsertOutcome::SkippedExisting) => {
                info!("⏭️  '{}' already present, skipping.", seed.title);
                ItemOutcome::Skipped
            }
            Err(e) => {
                warn!("⚠️  Failed to add '{}': {}", seed.title, e);
                ItemOutcome::Failed(e.to_string())
            }
        };

        report.items.push((seed.title.clone(), outcome));
    }

    info!(
        "🏁 Import complete: {} added, {} skipped, {} failed.",
        report.added(),
        report.skipped(),
        report.failed()
    );
    report
}

async fn import_one(store: &Store, fetcher: &Fetcher, seed: &Seed) -> Result<InsertOutcome> {
    let timeout = Duration::from_secs(BULK_FETCH_TIMEOUT_SECS);
    let text = fetcher.fetch_text(&seed.url, timeout).await?;

    let table = FrequencyTable::from_text(&text, BULK_MIN_WORD_LEN);
    let blob = format_frequencies(&top_words(&table, TOP_K));

    store.insert_if_absent(&seed.title, &blob).await
}

/// Interactive variant of the fetch half of the pipeline: 10s timeout,
/// minimum word length 1. Returns the formatted blob; saving is the
/// caller's decision.
pub async fn fetch_top_words(fetcher: &Fetcher, url: &str) -> Result<String> {
    let timeout = Duration::from_secs(INTERACTIVE_FETCH_TIMEOUT_SECS);
    let text = fetcher.fetch_text(url, timeout).await?;

    let table = FrequencyTable::from_text(&text, INTERACTIVE_MIN_WORD_LEN);
    Ok(format_frequencies(&top_words(&table, TOP_K)))
}
