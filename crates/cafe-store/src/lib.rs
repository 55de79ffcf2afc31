//! # cafe-store
//!
//! Storage layer for the cafe API.
//!
//! A single SQLite table holds every cafe. [`Database`] owns the connection
//! and runs each query on the blocking pool; [`CafeStore`] is the data
//! access layer that maps rows to [`Cafe`] values.
//!
//! ## Quick start
//!
//! ```ignore
//! use cafe_store::{CafeStore, Database, NewCafe};
//!
//! let db = Database::open_and_init("data/cafes.db").await?;
//! let cafes = CafeStore::new(db);
//! let all = cafes.list_all().await?;
//! ```

pub mod cafe;
pub mod cafe_store;
pub mod db;
pub mod error;
pub mod schema;

// ── re-exports ───────────────────────────────────────────────────────

pub use cafe::{Cafe, NewCafe, is_truthy, title_case};
pub use cafe_store::CafeStore;
pub use db::Database;
pub use error::{StoreError, StoreResult};
