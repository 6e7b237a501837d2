//! Todo domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp, TodoId, UserId};

/// Published when a user marks a todo as done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoCompleted {
    pub event_id: EventId,
    pub todo_id: TodoId,
    pub user_id: UserId,
    pub completed_at: Timestamp,
}

impl TodoCompleted {
    pub fn new(todo_id: TodoId, user_id: UserId) -> Self {
        Self {
            event_id: EventId::new(),
            todo_id,
            user_id,
            completed_at: Timestamp::now(),
        }
    }
}

domain_event!(
    TodoCompleted,
    event_type = "todo.completed",
    source = "todo",
    occurred_at = completed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn todo_completed_routes_as_todo_completed() {
        let event = TodoCompleted::new(TodoId::new(7).unwrap(), UserId::new(42).unwrap());

        assert_eq!(event.event_type(), "todo.completed");
        assert_eq!(event.source(), "todo");
    }

    #[test]
    fn todo_completed_payload_survives_envelope() {
        let event = TodoCompleted::new(TodoId::new(7).unwrap(), UserId::new(42).unwrap());
        let envelope = event.to_envelope().unwrap();

        let restored: TodoCompleted = envelope.payload_as().unwrap();
        assert_eq!(restored, event);
        assert_eq!(envelope.payload["todo_id"], 7);
    }
}
