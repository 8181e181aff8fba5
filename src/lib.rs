//! Persistence layer for the postdeck application: user accounts
//! (registration, credential verification, roles, API-usage counters) and
//! the scheduled-post queue, backed by a local SQLite database.
//!
//! The surrounding web application owns the process and the UI; this crate
//! only stores and reads rows. Construct one [`AccountStorage`] at startup
//! via [`AccountStorage::connect`] and share it.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod report;

pub use config::StoreConfig;
pub use db::{AccountStorage, DEFAULT_ROLE, ScheduledPost};
pub use error::StoreError;
pub use report::{ErrorSink, SilentSink};
