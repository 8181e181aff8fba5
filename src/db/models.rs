use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role assigned to accounts registered without an explicit role.
pub const DEFAULT_ROLE: &str = "user";

/// A row in `scheduled_posts`.
///
/// `schedule_time` is stored verbatim as the caller supplied it and listing
/// orders by it as TEXT, so callers wanting chronological order should use
/// a lexicographically sortable format such as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct ScheduledPost {
    pub id: i64,
    pub user_email: String,
    pub platform: String,
    pub content: String,
    pub schedule_time: String,
}
