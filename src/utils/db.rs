use std::str::FromStr;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub async fn build_db_pool(store: RepositoryStore, config: &Configuration) -> LibraryResult<SqlitePool> {
    let url = store.database_url(config);
    let options = SqliteConnectOptions::from_str(url.as_str())
        .map_err(LibraryError::from)?
        .create_if_missing(true);
    // every connection to an in-memory database sees its own copy, so the
    // pool for that store is pinned to a single connection
    let max_connections = match store {
        RepositoryStore::Sqlite => 5,
        RepositoryStore::SqliteInMemory => 1,
    };
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(LibraryError::from)
}

// idempotent so it can run on every startup
pub async fn create_books_table(pool: &SqlitePool) -> LibraryResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS books (
             isbn TEXT PRIMARY KEY,
             amazon_url TEXT NOT NULL,
             author TEXT NOT NULL,
             language TEXT NOT NULL,
             pages INTEGER NOT NULL,
             publisher TEXT NOT NULL,
             title TEXT NOT NULL,
             year INTEGER NOT NULL)")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(LibraryError::from)
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .json()
        .init();
}

impl From<sqlx::Error> for LibraryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    LibraryError::duplicate_key(
                        format!("duplicate key {}", db_err).as_str())
                } else {
                    let reason = db_err.code().map(|code| code.to_string());
                    LibraryError::database(
                        format!("database error {}", db_err).as_str(), reason, false)
                }
            }
            sqlx::Error::RowNotFound => {
                LibraryError::not_found("row not found")
            }
            sqlx::Error::PoolTimedOut => {
                LibraryError::database("database pool timed out", None, true)
            }
            other => {
                LibraryError::database(
                    format!("database error {}", other).as_str(), None, false)
            }
        }
    }
}
