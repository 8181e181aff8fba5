use crate::auth;
use crate::config::StoreConfig;
use crate::db::models::{DEFAULT_ROLE, ScheduledPost};
use crate::db::schema::SQLITE_INIT;
use crate::error::StoreError;
use crate::report::ErrorSink;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub type SqlitePool = Pool<Sqlite>;

/// SQLite-backed store for user accounts and the scheduled-post queue.
///
/// Every public operation executes a single statement; failures are logged,
/// forwarded to the injected [`ErrorSink`], and mapped to the operation's
/// safe default (`false`, `0`, `None`, empty vec). Only [`Self::connect`]
/// propagates errors, since a store whose schema cannot be established is
/// unusable.
#[derive(Clone)]
pub struct AccountStorage {
    pool: SqlitePool,
    sink: Arc<dyn ErrorSink>,
    bcrypt_cost: u32,
}

impl AccountStorage {
    /// Open the database at the configured path, creating the file and its
    /// parent directory if absent, and initialize the schema. Idempotent
    /// across restarts.
    pub async fn connect(cfg: &StoreConfig, sink: Arc<dyn ErrorSink>) -> Result<Self, StoreError> {
        info!(path = %cfg.database_path.display(), "initializing database");

        if let Some(parent) = cfg.database_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::DataDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&cfg.database_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| StoreError::Open {
                path: cfg.database_path.clone(),
                source: e,
            })?;

        let storage = Self {
            pool,
            sink,
            bcrypt_cost: cfg.bcrypt_cost,
        };
        storage.init_schema().await?;
        debug!("database tables created successfully");
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    async fn init_schema(&self) -> Result<(), StoreError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Register a new account. The credential is bcrypt-hashed before
    /// storage. Returns `false` when the email is already registered (an
    /// expected outcome, not reported to the sink) or on storage failure.
    pub async fn create_user(&self, email: &str, password: &str, role: Option<&str>) -> bool {
        info!(email, "attempting to add user");
        match self.try_create_user(email, password, role).await {
            Ok(()) => {
                debug!(email, "user added successfully");
                true
            }
            Err(e) if e.is_unique_violation() => {
                warn!(email, "user already exists");
                false
            }
            Err(e) => {
                error!(email, error = %e, "database error during user addition");
                self.sink
                    .report(&format!("Database error during user addition: {e}"));
                false
            }
        }
    }

    async fn try_create_user(
        &self,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> Result<(), StoreError> {
        let hashed = auth::hash_password(password, self.bcrypt_cost).await?;
        sqlx::query("INSERT INTO users (email, password, role) VALUES (?, ?, ?)")
            .bind(email)
            .bind(hashed)
            .bind(role.unwrap_or(DEFAULT_ROLE))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Check a credential pair. Unknown email, wrong password, and storage
    /// failure are deliberately indistinguishable: all return `false`.
    pub async fn verify_user(&self, email: &str, password: &str) -> bool {
        info!(email, "verifying user");
        match self.try_verify_user(email, password).await {
            Ok(true) => {
                debug!(email, "user verified successfully");
                true
            }
            Ok(false) => {
                warn!(email, "invalid credentials");
                false
            }
            Err(e) => {
                error!(email, error = %e, "database error during user verification");
                self.sink
                    .report(&format!("Database error during user verification: {e}"));
                false
            }
        }
    }

    async fn try_verify_user(&self, email: &str, password: &str) -> Result<bool, StoreError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some((hash,)) => auth::verify_password(password, &hash).await,
            None => Ok(false),
        }
    }

    /// Role stored for `email`, or `None` when no such account exists (or
    /// the lookup fails).
    pub async fn get_user_role(&self, email: &str) -> Option<String> {
        info!(email, "fetching role for user");
        match self.try_get_user_role(email).await {
            Ok(role) => {
                debug!(email, role = role.as_deref().unwrap_or("<none>"), "fetched user role");
                role
            }
            Err(e) => {
                error!(email, error = %e, "database error fetching user role");
                self.sink
                    .report(&format!("Database error fetching user role: {e}"));
                None
            }
        }
    }

    async fn try_get_user_role(&self, email: &str) -> Result<Option<String>, StoreError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT role FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(role,)| role))
    }

    /// Current API-usage counter for `email`; `0` for unknown accounts and
    /// on lookup failure.
    pub async fn get_api_calls(&self, email: &str) -> i64 {
        info!(email, "fetching API call count");
        match self.try_get_api_calls(email).await {
            Ok(calls) => {
                debug!(email, calls, "fetched API call count");
                calls
            }
            Err(e) => {
                error!(email, error = %e, "database error fetching API call count");
                self.sink
                    .report(&format!("Database error fetching API call count: {e}"));
                0
            }
        }
    }

    async fn try_get_api_calls(&self, email: &str) -> Result<i64, StoreError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT api_calls FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(calls,)| calls).unwrap_or(0))
    }

    /// Bump the usage counter by one. A single atomic UPDATE, so interleaved
    /// callers never lose an increment. Silent no-op when no account matches.
    pub async fn increment_api_calls(&self, email: &str) {
        info!(email, "incrementing API call count");
        let res = sqlx::query("UPDATE users SET api_calls = api_calls + 1 WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await;
        match res {
            Ok(_) => debug!(email, "API call count incremented"),
            Err(e) => {
                error!(email, error = %e, "database error incrementing API call count");
                self.sink
                    .report(&format!("Database error incrementing API call count: {e}"));
            }
        }
    }

    /// Queue a post. `platform` and `schedule_time` are stored verbatim
    /// without format validation.
    pub async fn schedule_post(
        &self,
        user_email: &str,
        platform: &str,
        content: &str,
        schedule_time: &str,
    ) {
        info!(user_email, platform, "scheduling post");
        let res = sqlx::query(
            "INSERT INTO scheduled_posts (user_email, platform, content, schedule_time) VALUES (?, ?, ?, ?)",
        )
        .bind(user_email)
        .bind(platform)
        .bind(content)
        .bind(schedule_time)
        .execute(&self.pool)
        .await;
        match res {
            Ok(_) => debug!(user_email, platform, schedule_time, "post scheduled"),
            Err(e) => {
                error!(user_email, error = %e, "database error scheduling post");
                self.sink
                    .report(&format!("Database error scheduling post: {e}"));
            }
        }
    }

    /// All queued posts for `user_email`, ordered ascending by
    /// `schedule_time` as TEXT. Empty on unknown email or storage failure.
    pub async fn get_user_scheduled_posts(&self, user_email: &str) -> Vec<ScheduledPost> {
        info!(user_email, "fetching scheduled posts");
        let res = sqlx::query_as::<_, ScheduledPost>(
            r#"SELECT id, user_email, platform, content, schedule_time
               FROM scheduled_posts WHERE user_email = ? ORDER BY schedule_time"#,
        )
        .bind(user_email)
        .fetch_all(&self.pool)
        .await;
        match res {
            Ok(posts) => {
                debug!(user_email, count = posts.len(), "retrieved scheduled posts");
                posts
            }
            Err(e) => {
                error!(user_email, error = %e, "database error fetching scheduled posts");
                self.sink
                    .report(&format!("Database error fetching scheduled posts: {e}"));
                Vec::new()
            }
        }
    }

    /// Delete the post with `post_id`; no-op when no such row exists.
    pub async fn delete_scheduled_post(&self, post_id: i64) {
        info!(post_id, "deleting scheduled post");
        let res = sqlx::query("DELETE FROM scheduled_posts WHERE id = ?")
            .bind(post_id)
            .execute(&self.pool)
            .await;
        match res {
            Ok(_) => debug!(post_id, "scheduled post deleted"),
            Err(e) => {
                error!(post_id, error = %e, "database error deleting scheduled post");
                self.sink
                    .report(&format!("Database error deleting scheduled post: {e}"));
            }
        }
    }
}
