// ===== gutenlex/crates/gutenlex-core/src/consts.rs =====
/// Number of top-ranked words persisted per book.
pub const TOP_K: usize = 10;

/// Minimum token length for the bulk import path.
/// Short function words (the, and, of...) are dropped wholesale.
pub const BULK_MIN_WORD_LEN: usize = 5;

/// Minimum token length for the interactive fetch path.
/// Every word counts, including single characters.
pub const INTERACTIVE_MIN_WORD_LEN: usize = 1;

/// Per-request timeout for bulk import fetches, in seconds.
pub const BULK_FETCH_TIMEOUT_SECS: u64 = 20;

/// Per-request timeout for interactive fetches, in seconds.
pub const INTERACTIVE_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default on-disk database filename.
pub const DEFAULT_DB_FILE: &str = "database.db";
