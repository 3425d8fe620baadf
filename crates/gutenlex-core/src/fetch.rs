// ===== gutenlex/crates/gutenlex-core/src/fetch.rs =====
use crate::error::{Error, Result};
use reqwest::{Client, Url};
use std::time::Duration;

/// HTTP text fetcher. One shared client, one blocking-style request per
/// call, timeout supplied by the caller (20s bulk, 10s interactive).
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Downloads `url` as plain text.
    ///
    /// The URL must carry an http/https scheme; anything else is rejected
    /// with [`Error::InvalidUrl`] before any network I/O happens. Non-2xx
    /// responses and transport failures surface as [`Error::Fetch`].
    pub async fn fetch_text(&self, url: &str, timeout: Duration) -> Result<String> {
        let parsed = Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(url.to_string()));
        }

        let response = self
            .client
            .get(parsed)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives a display title from a book URL: last path segment, `.txt`
/// stripped, hyphens to spaces, each word capitalized.
/// `.../cache/epub/1342/pg1342.txt` becomes `Pg1342`.
pub fn title_from_url(url: &str) -> String {
    let stem = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
    let stem = stem.strip_suffix(".txt").unwrap_or(stem);

    stem.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
