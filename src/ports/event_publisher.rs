//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how the domain publishes events without knowing
//! how they are dispatched to listeners.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Synchronous listeners have finished before `publish` returns, and their
///   failures are propagated to the caller
/// - Deferred listeners never report back to the caller
///
/// # Example
///
/// ```ignore
/// let envelope = TodoCompleted::new(todo_id, user_id).to_envelope()?;
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingPublisher(Mutex<Vec<String>>);

    #[async_trait]
    impl EventPublisher for RecordingPublisher {
        async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
            self.0.lock().unwrap().push(event.event_type);
            Ok(())
        }
    }

    #[tokio::test]
    async fn publish_all_defaults_to_sequential_publish() {
        let publisher = RecordingPublisher(Mutex::new(Vec::new()));

        publisher
            .publish_all(vec![
                EventEnvelope::test_fixture("a.one"),
                EventEnvelope::test_fixture("b.two"),
            ])
            .await
            .unwrap();

        assert_eq!(*publisher.0.lock().unwrap(), vec!["a.one", "b.two"]);
    }

    #[test]
    fn event_publisher_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn EventPublisher>();
    }
}
