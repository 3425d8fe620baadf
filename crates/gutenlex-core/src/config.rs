// ===== gutenlex/crates/gutenlex-core/src/config.rs =====
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One bulk-import target: a book title and the URL of its plain-text copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub title: String,
    pub url: String,
}

impl Seed {
    fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// The embedded seed catalog: ten well-known Project Gutenberg titles.
pub fn default_seeds() -> Vec<Seed> {
    vec![
        Seed::new(
            "Pride and Prejudice",
            "https://www.gutenberg.org/cache/epub/1342/pg1342.txt",
        ),
        Seed::new(
            "Moby Dick",
            "https://www.gutenberg.org/cache/epub/2701/pg2701.txt",
        ),
        Seed::new(
            "Dracula",
            "https://www.gutenberg.org/cache/epub/345/pg345.txt",
        ),
        Seed::new(
            "Frankenstein",
            "https://www.gutenberg.org/cache/epub/84/pg84.txt",
        ),
        Seed::new(
            "The Adventures of Sherlock Holmes",
            "https://www.gutenberg.org/cache/epub/1661/pg1661.txt",
        ),
        Seed::new(
            "Alice's Adventures in Wonderland",
            "https://www.gutenberg.org/cache/epub/11/pg11.txt",
        ),
        Seed::new(
            "The Picture of Dorian Gray",
            "https://www.gutenberg.org/cache/epub/174/pg174.txt",
        ),
        Seed::new(
            "Jane Eyre",
            "https://www.gutenberg.org/cache/epub/1260/pg1260.txt",
        ),
        Seed::new(
            "The Count of Monte Cristo",
            "https://www.gutenberg.org/cache/epub/1184/pg1184.txt",
        ),
        Seed::new(
            "Little Women",
            "https://www.gutenberg.org/cache/epub/37106/pg37106.txt",
        ),
    ]
}

/// Loads a seed catalog from a JSON file: an array of `{title, url}` objects.
pub fn load_seeds_from_file(path: &Path) -> Result<Vec<Seed>> {
    let raw = fs::read_to_string(path)?;
    let seeds = serde_json::from_str(&raw)?;
    Ok(seeds)
}
