//! SQLite connection handle.
//!
//! The [`Database`] struct wraps a `rusqlite::Connection` behind an
//! `Arc<Mutex<>>` and exposes async methods that use
//! `tokio::task::spawn_blocking` to avoid blocking the async runtime.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use tracing::{debug, info};

use crate::cafe::title_case;
use crate::error::{StoreError, StoreResult};
use crate::schema;

/// Thread-safe handle to a SQLite database.
///
/// All reads and writes go through [`Database::execute`], which dispatches
/// onto the blocking thread pool. The mutex serializes access, so every
/// closure sees a consistent connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open (or create) a database at `path` and configure the connection.
    ///
    /// This call blocks briefly (file I/O), so call it during startup or
    /// wrap it in `spawn_blocking` yourself.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "opening database");

        let conn = Connection::open(path)?;
        Self::configure(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory database, useful for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        debug!("opening in-memory database");

        let conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open the database and create the cafe table if it is missing.
    pub async fn open_and_init(path: impl AsRef<Path> + Send + 'static) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let db = tokio::task::spawn_blocking(move || Self::open(&path)).await??;
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Create the schema if it does not exist yet. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        self.execute(|conn| schema::ensure(conn)).await
    }

    /// Execute a closure against the connection on the blocking pool.
    ///
    /// This is the primary way to interact with the database from async code.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let count: i64 = db.execute(|conn| {
    ///     Ok(conn.query_row("SELECT count(*) FROM cafe", [], |row| row.get(0))?)
    /// }).await?;
    /// ```
    pub async fn execute<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StoreError::TaskJoin(format!("mutex poisoned: {e}")))?;
            f(&conn)
        })
        .await?
    }

    /// Cheap liveness probe used by the status endpoint.
    pub async fn ping(&self) -> bool {
        let result = self
            .execute(|conn| {
                conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
                Ok(())
            })
            .await;
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database health check failed");
                false
            }
        }
    }

    // ── connection setup ─────────────────────────────────────────────

    /// Apply pragmas and register the SQL functions queries rely on.
    fn configure(conn: &Connection) -> StoreResult<()> {
        // WAL mode: readers do not block the writer.
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "busy_timeout", 5_000_i32)?;

        // `title_case(text)` lets location filters normalize both sides.
        conn.create_scalar_function(
            "title_case",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let value: String = ctx.get(0)?;
                Ok(title_case(&value))
            },
        )?;

        debug!("connection configured (WAL, synchronous=NORMAL, title_case)");
        Ok(())
    }
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_in_memory_works() {
        let db = Database::open_in_memory().unwrap();
        let version: String = db
            .execute(|conn| {
                let v: String =
                    conn.query_row("SELECT sqlite_version()", [], |row| row.get(0))?;
                Ok(v)
            })
            .await
            .unwrap();
        assert!(!version.is_empty());
    }

    #[tokio::test]
    async fn ensure_schema_creates_cafe_table() {
        let db = Database::open_in_memory().unwrap();
        db.ensure_schema().await.unwrap();

        let count: i64 = db
            .execute(|conn| {
                let c: i64 = conn.query_row("SELECT count(*) FROM cafe", [], |row| row.get(0))?;
                Ok(c)
            })
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn title_case_function_is_registered() {
        let db = Database::open_in_memory().unwrap();
        let titled: String = db
            .execute(|conn| {
                let v: String =
                    conn.query_row("SELECT title_case('new YORK')", [], |row| row.get(0))?;
                Ok(v)
            })
            .await
            .unwrap();
        assert_eq!(titled, "New York");
    }

    #[tokio::test]
    async fn ping_reports_healthy_connection() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.ping().await);
    }
}
