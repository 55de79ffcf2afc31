//! Data access layer for cafe rows.
//!
//! [`CafeStore`] wraps one SQL statement per operation and maps rows to
//! [`Cafe`] values. Every write is a single statement, so SQLite's own
//! statement atomicity is the only transactional guarantee needed.

use rusqlite::{Connection, OptionalExtension, Row};
use tracing::{debug, info, instrument};

use crate::cafe::{Cafe, NewCafe, title_case};
use crate::db::Database;
use crate::error::{StoreError, StoreResult};

/// Column list shared by every `SELECT`, in [`cafe_from_row`] order.
const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, has_sockets, has_toilet, \
                            has_wifi, can_take_calls, seats, coffee_price";

/// CRUD operations on cafe records.
#[derive(Clone)]
pub struct CafeStore {
    db: Database,
}

impl CafeStore {
    /// Create a new cafe store backed by `db`.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Every cafe, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> StoreResult<Vec<Cafe>> {
        self.db
            .execute(|conn| {
                let mut stmt =
                    conn.prepare(&format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY id ASC"))?;
                let cafes = stmt
                    .query_map([], cafe_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(cafes)
            })
            .await
    }

    /// Cafes whose location matches `location` once both sides are
    /// title-cased.
    ///
    /// `"london"`, `"LONDON"` and `"London"` all select the same rows, and
    /// a row stored as `"london"` is found by any of them.
    #[instrument(skip(self))]
    pub async fn find_by_location(&self, location: &str) -> StoreResult<Vec<Cafe>> {
        let location = title_case(location);
        self.db
            .execute(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {CAFE_COLUMNS} FROM cafe WHERE title_case(location) = ?1 ORDER BY id ASC"
                ))?;
                let cafes = stmt
                    .query_map(rusqlite::params![location], cafe_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(cafes)
            })
            .await
    }

    /// Fetch a single cafe by id, returning `None` if not found.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Cafe>> {
        self.db.execute(move |conn| select_by_id(conn, id)).await
    }

    /// One cafe drawn uniformly at random.
    ///
    /// Returns [`StoreError::EmptyStore`] when the table has no rows.
    #[instrument(skip(self))]
    pub async fn pick_random(&self) -> StoreResult<Cafe> {
        self.db
            .execute(|conn| {
                conn.query_row(
                    &format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY RANDOM() LIMIT 1"),
                    [],
                    cafe_from_row,
                )
                .optional()?
                .ok_or(StoreError::EmptyStore)
            })
            .await
    }

    /// Insert a new cafe and return it with its assigned id.
    ///
    /// Fails with [`StoreError::MissingField`] if a required field is absent
    /// and with [`StoreError::Duplicate`] if the name is already taken.
    #[instrument(skip(self, input), fields(name = ?input.name))]
    pub async fn insert(&self, input: NewCafe) -> StoreResult<Cafe> {
        let valid = input.validate()?;

        let cafe = self
            .db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, \
                     has_wifi, has_sockets, can_take_calls, coffee_price) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                    rusqlite::params![
                        valid.name,
                        valid.map_url,
                        valid.img_url,
                        valid.location,
                        valid.seats,
                        valid.has_toilet,
                        valid.has_wifi,
                        valid.has_sockets,
                        valid.can_take_calls,
                        valid.coffee_price,
                    ],
                )
                .map_err(|e| {
                    if let rusqlite::Error::SqliteFailure(ref err, _) = e
                        && err.code == rusqlite::ErrorCode::ConstraintViolation
                    {
                        return StoreError::Duplicate {
                            field: "name",
                            value: valid.name.clone(),
                        };
                    }
                    StoreError::Sqlite(e)
                })?;

                Ok(Cafe {
                    id: conn.last_insert_rowid(),
                    name: valid.name,
                    map_url: valid.map_url,
                    img_url: valid.img_url,
                    location: valid.location,
                    has_sockets: valid.has_sockets,
                    has_toilet: valid.has_toilet,
                    has_wifi: valid.has_wifi,
                    can_take_calls: valid.can_take_calls,
                    seats: valid.seats,
                    coffee_price: valid.coffee_price,
                })
            })
            .await?;

        info!(cafe_id = cafe.id, name = %cafe.name, "cafe added");
        Ok(cafe)
    }

    /// Set the coffee price of a cafe; `None` clears it.
    ///
    /// Returns the updated cafe, or `None` if no cafe has that id.
    #[instrument(skip(self))]
    pub async fn update_price(
        &self,
        id: i64,
        new_price: Option<String>,
    ) -> StoreResult<Option<Cafe>> {
        let updated = self
            .db
            .execute(move |conn| {
                let changed = conn.execute(
                    "UPDATE cafe SET coffee_price = ?2 WHERE id = ?1",
                    rusqlite::params![id, new_price],
                )?;
                if changed == 0 {
                    return Ok(None);
                }
                select_by_id(conn, id)
            })
            .await?;

        match &updated {
            Some(cafe) => debug!(cafe_id = cafe.id, price = ?cafe.coffee_price, "price updated"),
            None => debug!(cafe_id = id, "price update matched no cafe"),
        }
        Ok(updated)
    }

    /// Delete a cafe. Returns `false` if no cafe has that id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let removed = self
            .db
            .execute(move |conn| {
                let changed = conn.execute("DELETE FROM cafe WHERE id = ?1", rusqlite::params![id])?;
                Ok(changed > 0)
            })
            .await?;

        if removed {
            info!(cafe_id = id, "cafe deleted");
        }
        Ok(removed)
    }

    /// Number of stored cafes.
    pub async fn count(&self) -> StoreResult<i64> {
        self.db
            .execute(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM cafe", [], |row| row.get(0))?))
            .await
    }
}

// ── row mapping ──────────────────────────────────────────────────────

fn select_by_id(conn: &Connection, id: i64) -> StoreResult<Option<Cafe>> {
    let cafe = conn
        .query_row(
            &format!("SELECT {CAFE_COLUMNS} FROM cafe WHERE id = ?1"),
            rusqlite::params![id],
            cafe_from_row,
        )
        .optional()?;
    Ok(cafe)
}

fn cafe_from_row(row: &Row<'_>) -> rusqlite::Result<Cafe> {
    Ok(Cafe {
        id: row.get(0)?,
        name: row.get(1)?,
        map_url: row.get(2)?,
        img_url: row.get(3)?,
        location: row.get(4)?,
        has_sockets: row.get(5)?,
        has_toilet: row.get(6)?,
        has_wifi: row.get(7)?,
        can_take_calls: row.get(8)?,
        seats: row.get(9)?,
        coffee_price: row.get(10)?,
    })
}

// ── tests ────────────────────────────────────────────────────────────
