//! Table definition for the cafe store.
//!
//! The column set is fixed. [`ensure`] creates the table when it is absent
//! and does nothing otherwise; there is no versioning.

use rusqlite::Connection;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Name of the single table holding cafe rows.
pub const CAFE_TABLE: &str = "cafe";

/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
const SCHEMA_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS cafe (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        name           TEXT    NOT NULL UNIQUE,
        map_url        TEXT    NOT NULL,
        img_url        TEXT    NOT NULL,
        location       TEXT    NOT NULL,
        seats          TEXT    NOT NULL,
        has_toilet     BOOLEAN NOT NULL,
        has_wifi       BOOLEAN NOT NULL,
        has_sockets    BOOLEAN NOT NULL,
        can_take_calls BOOLEAN NOT NULL,
        coffee_price   TEXT
    );
"#;

/// Create the cafe table if it does not exist.
///
/// This is a **synchronous** function; call it through
/// [`Database::ensure_schema`](crate::Database::ensure_schema) from async code.
pub fn ensure(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| StoreError::Schema(format!("failed to create {CAFE_TABLE} table: {e}")))?;
    debug!(table = CAFE_TABLE, "schema ensured");
    Ok(())
}

// ── tests ────────────────────────────────────────────────────────────
