//! StatsUpdateLogger - Deferred listener for every `stats.*` event.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Writes a structured log line for each stats change.
#[derive(Debug, Default)]
pub struct StatsUpdateLogger;

impl StatsUpdateLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler for StatsUpdateLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            user_id = event.metadata.user_id.as_deref().unwrap_or("-"),
            causation_id = event.metadata.causation_id.as_deref().unwrap_or("-"),
            completed_todos = event.payload.get("completed_todos").and_then(|v| v.as_u64()),
            "user stats changed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "StatsUpdateLogger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_any_stats_event() {
        let logger = StatsUpdateLogger::new();

        let result = logger
            .handle(EventEnvelope::new(
                "stats.updated",
                "stats",
                serde_json::json!({ "completed_todos": 3 }),
            ))
            .await;

        assert!(result.is_ok());
        assert_eq!(logger.name(), "StatsUpdateLogger");
    }
}
