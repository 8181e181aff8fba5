use sqlx::Error as SqlxError;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Failures surfaced by the store.
///
/// `DataDir` and `Open` occur only while establishing the store and are
/// fatal: they propagate out of the constructor. Every other variant is a
/// per-operation failure that the public CRUD methods handle locally.
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open database {path}: {source}")]
    Open { path: PathBuf, source: SqlxError },

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl StoreError {
    /// True when the underlying failure is a UNIQUE constraint violation,
    /// e.g. registering an email that already has an account.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::Database(SqlxError::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }
}
