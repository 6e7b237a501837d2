//! UserStats aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Progress counters for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_id: UserId,
    pub completed_todos: u64,
    pub last_completed_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

impl UserStats {
    /// Empty stats for a user who has not completed anything yet.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            completed_todos: 0,
            last_completed_at: None,
            updated_at: Timestamp::now(),
        }
    }

    /// Counts one completed todo.
    ///
    /// `last_completed_at` never moves backwards, so a late-delivered
    /// completion still counts without rewinding the timestamp.
    pub fn record_completion(&mut self, completed_at: Timestamp) {
        self.completed_todos += 1;
        self.last_completed_at = Some(match self.last_completed_at {
            Some(previous) if previous.is_after(&completed_at) => previous,
            _ => completed_at,
        });
        self.updated_at = Timestamp::now();
    }
}
