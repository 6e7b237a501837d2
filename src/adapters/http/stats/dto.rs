//! DTOs for stats endpoints.

use serde::Serialize;

use crate::domain::stats::UserStats;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponse {
    pub user_id: i64,
    pub completed_todos: u64,
    pub last_completed_at: Option<String>,
    pub updated_at: String,
}

impl From<UserStats> for UserStatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            user_id: stats.user_id.value(),
            completed_todos: stats.completed_todos,
            last_completed_at: stats.last_completed_at.map(|t| t.to_iso8601()),
            updated_at: stats.updated_at.to_iso8601(),
        }
    }
}
