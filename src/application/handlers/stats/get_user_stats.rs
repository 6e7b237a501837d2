//! GetUserStatsHandler - Query handler for a user's stats.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::stats::UserStats;
use crate::ports::StatsRepository;

#[derive(Debug, Clone)]
pub struct GetUserStatsQuery {
    pub user_id: UserId,
}

/// Handler for reading stats.
///
/// Callers are authorized by the HTTP layer: the gate decides whether the
/// requester may see `user_id`'s stats.
pub struct GetUserStatsHandler {
    stats_repo: Arc<dyn StatsRepository>,
}

impl GetUserStatsHandler {
    pub fn new(stats_repo: Arc<dyn StatsRepository>) -> Self {
        Self { stats_repo }
    }

    pub async fn handle(&self, query: GetUserStatsQuery) -> Result<UserStats, DomainError> {
        self.stats_repo
            .find_by_user(query.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::StatsNotFound,
                    format!("No stats recorded for user {}", query.user_id),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stats::InMemoryStatsRepository;

    #[tokio::test]
    async fn returns_saved_stats() {
        let repo = Arc::new(InMemoryStatsRepository::new());
        let user_id = UserId::new(42).unwrap();
        repo.save(&UserStats::new(user_id)).await.unwrap();
        let handler = GetUserStatsHandler::new(repo);

        let stats = handler.handle(GetUserStatsQuery { user_id }).await.unwrap();

        assert_eq!(stats.user_id, user_id);
    }

    #[tokio::test]
    async fn missing_stats_is_not_found() {
        let handler = GetUserStatsHandler::new(Arc::new(InMemoryStatsRepository::new()));

        let err = handler
            .handle(GetUserStatsQuery {
                user_id: UserId::new(9).unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StatsNotFound);
    }
}
