// ===== gutenlex/crates/gutenlex-core/src/store.rs =====
use crate::error::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use tracing::info;

/// Result of a skip-if-exists insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    SkippedExisting,
}

/// Title-keyed record store over SQLite.
///
/// Uniqueness of `title` is enforced by the PRIMARY KEY constraint, not by
/// the application. Records are never updated in place or deleted.
#[derive(Clone)]
pub struct Store {
    db: Pool<Sqlite>,
}

impl Store {
    /// Opens (creating if missing) the database file and applies the schema.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { db };
        store.apply_schema().await?;
        info!("🔌 Database ready at {:?}", path);
        Ok(store)
    }

    /// In-memory store, used by tests.
    pub async fn open_in_memory() -> Result<Self> {
        // One connection only: every new in-memory connection is a fresh DB.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { db };
        store.apply_schema().await?;
        Ok(store)
    }

    async fn apply_schema(&self) -> Result<()> {
        let schema = include_str!("schema.sql");
        sqlx::query(schema).execute(&self.db).await?;
        Ok(())
    }

    /// Exact, case-sensitive lookup. A miss is `Ok(None)`, never an error.
    pub async fn lookup(&self, title: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT word_frequencies FROM books WHERE title = ?")
            .bind(title)
            .fetch_optional(&self.db)
            .await?;

        Ok(row.map(|r| r.get(0)))
    }

    /// Bulk-import insert: silently keeps the existing row on a duplicate
    /// title. Idempotent.
    pub async fn insert_if_absent(&self, title: &str, blob: &str) -> Result<InsertOutcome> {
        let result =
            sqlx::query("INSERT OR IGNORE INTO books (title, word_frequencies) VALUES (?, ?)")
                .bind(title)
                .bind(blob)
                .execute(&self.db)
                .await?;

        if result.rows_affected() == 1 {
            Ok(InsertOutcome::Inserted)
        } else {
            Ok(InsertOutcome::SkippedExisting)
        }
    }

    /// Interactive-save insert: a duplicate title is a hard
    /// [`Error::DuplicateTitle`] and leaves the store unchanged.
    pub async fn insert_or_fail(&self, title: &str, blob: &str) -> Result<()> {
        let result = sqlx::query("INSERT INTO books (title, word_frequencies) VALUES (?, ?)")
            .bind(title)
            .bind(blob)
            .execute(&self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.is_unique_violation() {
                        return Err(Error::DuplicateTitle(title.to_string()));
                    }
                }
                Err(Error::Storage(e))
            }
        }
    }

    /// All stored titles, in insertion order.
    pub async fn list_titles(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT title FROM books ORDER BY rowid")
            .fetch_all(&self.db)
            .await?;

        Ok(rows.iter().map(|r| r.get(0)).collect())
    }
}
