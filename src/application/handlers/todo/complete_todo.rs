//! CompleteTodoHandler - Command handler for completing a todo.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DomainError, SerializableDomainEvent, TodoId};
use crate::domain::todo::TodoCompleted;
use crate::ports::EventPublisher;

/// Command to mark a todo as completed.
#[derive(Debug, Clone)]
pub struct CompleteTodoCommand {
    pub todo_id: TodoId,
}

/// Result of a successful completion.
#[derive(Debug, Clone)]
pub struct CompleteTodoResult {
    pub event: TodoCompleted,
}

/// Handler for completing todos.
///
/// Synchronous listeners of `todo.completed` have run by the time `handle`
/// returns; deferred ones (stats recalculation) have only been queued.
pub struct CompleteTodoHandler {
    event_publisher: Arc<dyn EventPublisher>,
}

impl CompleteTodoHandler {
    pub fn new(event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self { event_publisher }
    }

    pub async fn handle(
        &self,
        cmd: CompleteTodoCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteTodoResult, DomainError> {
        let event = TodoCompleted::new(cmd.todo_id, metadata.user_id);

        let envelope = event
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        tracing::info!(
            todo_id = %cmd.todo_id,
            user_id = %metadata.user_id,
            event_id = %event.event_id,
            source = metadata.source().unwrap_or("unknown"),
            "todo completed"
        );

        Ok(CompleteTodoResult { event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, EventEnvelope, UserId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockEventPublisher {
        published: Mutex<Vec<EventEnvelope>>,
        fail: bool,
    }

    impl MockEventPublisher {
        fn new() -> Self {
            Self {
                published: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                published: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn published(&self) -> Vec<EventEnvelope> {
            self.published.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventPublisher for MockEventPublisher {
        async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::EventHandlerFailed, "audit failed"));
            }
            self.published.lock().unwrap().push(event);
            Ok(())
        }
    }

    fn command() -> CompleteTodoCommand {
        CompleteTodoCommand {
            todo_id: TodoId::new(7).unwrap(),
        }
    }

    #[tokio::test]
    async fn publishes_todo_completed_for_the_caller() {
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CompleteTodoHandler::new(publisher.clone());

        let result = handler
            .handle(command(), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let published = publisher.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].event_type, "todo.completed");
        assert_eq!(published[0].event_id, result.event.event_id);
        assert_eq!(result.event.user_id, UserId::new(42).unwrap());

        let payload: TodoCompleted = published[0].payload_as().unwrap();
        assert_eq!(payload.todo_id.value(), 7);
    }

    #[tokio::test]
    async fn propagates_request_metadata_to_envelope() {
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CompleteTodoHandler::new(publisher.clone());

        handler
            .handle(command(), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let metadata = &publisher.published()[0].metadata;
        assert_eq!(metadata.correlation_id.as_deref(), Some("test-correlation-id"));
        assert_eq!(metadata.user_id.as_deref(), Some("42"));
        assert!(metadata.causation_id.is_none());
    }

    #[tokio::test]
    async fn publisher_failure_is_returned() {
        let handler = CompleteTodoHandler::new(Arc::new(MockEventPublisher::failing()));

        let err = handler
            .handle(command(), CommandMetadata::test_fixture())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EventHandlerFailed);
    }
}
