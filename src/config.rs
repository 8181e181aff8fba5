use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings for the store, decided once at startup by the host
/// application and passed to [`crate::AccountStorage::connect`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the SQLite database file. Parent directories are created on
    /// connect if absent.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// bcrypt cost factor applied when hashing new credentials. Verification
    /// reads the cost out of the stored hash, so changing this never breaks
    /// existing accounts.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("data/users.db")
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl StoreConfig {
    /// Load settings from `POSTDECK_`-prefixed environment variables
    /// (`POSTDECK_DATABASE_PATH`, `POSTDECK_BCRYPT_COST`), falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(StoreConfig::default()))
            .merge(Env::prefixed("POSTDECK_"))
            .extract()
    }
}
