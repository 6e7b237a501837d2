//! AuditLogger - Synchronous listener for every event.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Traces each event on the publisher's task, before `publish` returns.
#[derive(Debug, Default)]
pub struct AuditLogger;

impl AuditLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler for AuditLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::debug!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            source = %event.source,
            occurred_at = %event.occurred_at.to_iso8601(),
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or("-"),
            user_id = event.metadata.user_id.as_deref().unwrap_or("-"),
            "domain event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "AuditLogger"
    }
}
