//! In-memory implementation of `StatsRepository`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::stats::UserStats;
use crate::ports::StatsRepository;

/// Stats kept in a process-local map, lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStatsRepository {
    stats: RwLock<HashMap<UserId, UserStats>>,
}

impl InMemoryStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with recorded stats.
    pub async fn len(&self) -> usize {
        self.stats.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.stats.read().await.is_empty()
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<UserStats>, DomainError> {
        Ok(self.stats.read().await.get(&user_id).cloned())
    }

    async fn save(&self, stats: &UserStats) -> Result<(), DomainError> {
        self.stats
            .write()
            .await
            .insert(stats.user_id, stats.clone());
        Ok(())
    }

    async fn record_completion(
        &self,
        user_id: UserId,
        completed_at: Timestamp,
    ) -> Result<UserStats, DomainError> {
        let mut all = self.stats.write().await;
        let stats = all
            .entry(user_id)
            .or_insert_with(|| UserStats::new(user_id));
        stats.record_completion(completed_at);
        Ok(stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn unknown_user_has_no_stats() {
        let repo = InMemoryStatsRepository::new();

        let found = repo.find_by_user(UserId::new(1).unwrap()).await.unwrap();

        assert!(found.is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn save_replaces_previous_stats() {
        let repo = InMemoryStatsRepository::new();
        let user_id = UserId::new(42).unwrap();
        let mut stats = UserStats::new(user_id);
        repo.save(&stats).await.unwrap();

        stats.record_completion(Timestamp::now());
        repo.save(&stats).await.unwrap();

        let found = repo.find_by_user(user_id).await.unwrap().unwrap();
        assert_eq!(found.completed_todos, 1);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn record_completion_creates_stats_on_first_use() {
        let repo = InMemoryStatsRepository::new();
        let user_id = UserId::new(7).unwrap();

        let stats = repo.record_completion(user_id, Timestamp::now()).await.unwrap();

        assert_eq!(stats.completed_todos, 1);
        assert_eq!(repo.find_by_user(user_id).await.unwrap(), Some(stats));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_completions_for_one_user_are_all_counted() {
        let repo = Arc::new(InMemoryStatsRepository::new());
        let user_id = UserId::new(42).unwrap();

        let tasks: Vec<_> = (0..200)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.record_completion(user_id, Timestamp::now()).await.unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let stats = repo.find_by_user(user_id).await.unwrap().unwrap();
        assert_eq!(stats.completed_todos, 200);
    }
}
