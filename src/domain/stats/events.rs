//! Stats domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp, UserId};

use super::UserStats;

/// Published after a user's stats have been recalculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsUpdated {
    pub event_id: EventId,
    pub user_id: UserId,
    pub completed_todos: u64,
    pub updated_at: Timestamp,
}

impl StatsUpdated {
    pub fn from_stats(stats: &UserStats) -> Self {
        Self {
            event_id: EventId::new(),
            user_id: stats.user_id,
            completed_todos: stats.completed_todos,
            updated_at: stats.updated_at,
        }
    }
}

domain_event!(
    StatsUpdated,
    event_type = "stats.updated",
    source = "stats",
    occurred_at = updated_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainEvent;

    #[test]
    fn stats_updated_mirrors_stats() {
        let mut stats = UserStats::new(UserId::new(42).unwrap());
        stats.record_completion(Timestamp::now());

        let event = StatsUpdated::from_stats(&stats);

        assert_eq!(event.completed_todos, 1);
        assert_eq!(event.user_id, stats.user_id);
        assert_eq!(event.occurred_at(), stats.updated_at);
        assert_eq!(event.event_type(), "stats.updated");
    }
}
