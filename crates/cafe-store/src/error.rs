//! Error types for the cafe-store crate.
//!
//! All storage operations return [`StoreError`] via [`StoreResult`].

use thiserror::Error;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite operation failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The schema could not be created.
    #[error("schema setup failed: {0}")]
    Schema(String),

    /// A random pick was requested but the table holds no rows.
    #[error("no cafes in the store")]
    EmptyStore,

    /// A required column was not supplied.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A unique column already holds this value.
    #[error("{field} already exists: {value}")]
    Duplicate { field: &'static str, value: String },

    /// A blocking task was cancelled or panicked.
    #[error("background task failed: {0}")]
    TaskJoin(String),
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::TaskJoin(err.to_string())
    }
}
