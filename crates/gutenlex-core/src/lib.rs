pub mod config;
pub mod consts;
pub mod error;
pub mod fetch;
pub mod format;
pub mod importer;
pub mod ranker;
pub mod store;
pub mod tokenizer;
pub mod view;

pub use error::{Error, Result};
pub use ranker::RankedWord;
pub use store::{InsertOutcome, Store};
pub use tokenizer::FrequencyTable;
