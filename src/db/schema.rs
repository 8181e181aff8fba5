//! SQL DDL for initializing the account and schedule storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `users`: one row per account; `email` UNIQUE (creates an index
///   implicitly), `password` holds a bcrypt hash, `api_calls` is a
///   monotonic usage counter
/// - `scheduled_posts`: the post queue; `schedule_time` is TEXT and listing
///   orders by it lexicographically
/// - Non-unique index on `scheduled_posts(user_email)` for the per-user
///   listing query
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT 'user',
    api_calls INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS scheduled_posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_email TEXT NOT NULL,
    platform TEXT NOT NULL,
    content TEXT NOT NULL,
    schedule_time TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_scheduled_posts_user_email ON scheduled_posts(user_email);
"#;
