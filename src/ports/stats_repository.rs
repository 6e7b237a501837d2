//! StatsRepository port - persistence for per-user stats.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::stats::UserStats;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Returns the user's stats, or `None` if nothing was recorded yet.
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<UserStats>, DomainError>;

    /// Inserts or replaces the user's stats.
    async fn save(&self, stats: &UserStats) -> Result<(), DomainError>;

    /// Counts one completion for the user and returns the updated stats.
    ///
    /// The read-modify-write is atomic per user: concurrent calls for the
    /// same user must each be counted.
    async fn record_completion(
        &self,
        user_id: UserId,
        completed_at: Timestamp,
    ) -> Result<UserStats, DomainError>;
}
