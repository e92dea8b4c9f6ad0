use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Todo row. Serialized camelCase (`completedAt`) on the wire.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub completed_at: Option<i64>,
    pub creator: Uuid,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

/// Resolve the completion pair for a patch.
///
/// `completed: true` stamps the current epoch milliseconds; anything else —
/// explicit false or an omitted field — clears both, regardless of whatever
/// the caller supplied for the timestamp. This keeps the invariant that
/// `completed_at` is non-null iff `completed` is true.
pub fn resolve_completion(completed: Option<bool>) -> (bool, Option<i64>) {
    match completed {
        Some(true) => (true, Some(Utc::now().timestamp_millis())),
        _ => (false, None),
    }
}
