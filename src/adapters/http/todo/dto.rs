//! DTOs for todo endpoints.

use serde::Serialize;

use crate::domain::todo::TodoCompleted;

/// Response for POST /api/todos/:todo_id/complete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTodoResponse {
    pub todo_id: i64,
    pub event_id: String,
    pub completed_at: String,
}

impl From<&TodoCompleted> for CompleteTodoResponse {
    fn from(event: &TodoCompleted) -> Self {
        Self {
            todo_id: event.todo_id.value(),
            event_id: event.event_id.to_string(),
            completed_at: event.completed_at.to_iso8601(),
        }
    }
}
