use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid URL '{0}'. Make sure it starts with 'http://' or 'https://'.")]
    InvalidUrl(String),

    #[error("Failed to fetch the book: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Failed to access the database: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("'{0}' is already in the database.")]
    DuplicateTitle(String),

    #[error("Failed to read seed list: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Malformed seed list: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
