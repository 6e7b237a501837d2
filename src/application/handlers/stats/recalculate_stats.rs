//! StatsRecalculationHandler - Deferred listener for `todo.completed`.
//!
//! Folds each completed todo into the user's stats and announces the new
//! totals as `stats.updated`, linked to the todo event by causation id.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope, SerializableDomainEvent};
use crate::domain::stats::StatsUpdated;
use crate::domain::todo::TodoCompleted;
use crate::ports::{EventHandler, EventPublisher, StatsRepository};

pub struct StatsRecalculationHandler {
    stats_repo: Arc<dyn StatsRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl StatsRecalculationHandler {
    pub fn new(
        stats_repo: Arc<dyn StatsRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            stats_repo,
            event_publisher,
        }
    }
}

#[async_trait]
impl EventHandler for StatsRecalculationHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let completed: TodoCompleted = event.payload_as()?;

        let stats = self
            .stats_repo
            .record_completion(completed.user_id, completed.completed_at)
            .await?;

        let mut envelope = StatsUpdated::from_stats(&stats)
            .to_envelope()?
            .with_causation_id(event.event_id.as_str())
            .with_user_id(completed.user_id.to_string());
        if let Some(correlation_id) = event.metadata.correlation_id {
            envelope = envelope.with_correlation_id(correlation_id);
        }

        self.event_publisher.publish(envelope).await
    }

    fn name(&self) -> &'static str {
        "StatsRecalculationHandler"
    }
}
