//! Database module: models, schema, and the SQLite-backed store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool-backed storage exposing the account and schedule operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DEFAULT_ROLE, ScheduledPost};
pub use schema::SQLITE_INIT;
pub use sqlite::{AccountStorage, SqlitePool};
