//! EventSubscriber port - Interface for subscribing to domain events.
//!
//! Handlers register interest by event pattern (an exact tag such as
//! `todo.completed`, a family such as `stats.*`, or `*`) and pick one of two
//! dispatch modes:
//!
//! - **Synchronous** - runs on the publisher's task before `publish` returns;
//!   a failure propagates back to the publisher.
//! - **Deferred** - queued for a background worker; the publisher never
//!   waits for it and never sees its failure.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// # Example
///
/// ```ignore
/// struct StatsUpdateLogger;
///
/// #[async_trait]
/// impl EventHandler for StatsUpdateLogger {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         tracing::info!(event_type = %event.event_type, "stats changed");
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "StatsUpdateLogger"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging and error messages.
    fn name(&self) -> &'static str;
}

/// How a subscribed handler is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    Synchronous,
    Deferred,
}

/// Port for subscribing to domain events.
///
/// # Example
///
/// ```ignore
/// bus.subscribe("*", audit_logger);
/// bus.subscribe_deferred("todo.completed", stats_recalculation);
/// bus.subscribe_deferred("stats.*", stats_logger);
/// ```
pub trait EventSubscriber: Send + Sync {
    /// Subscribe a handler in the given dispatch mode.
    fn subscribe_with_mode(&self, pattern: &str, mode: DispatchMode, handler: Arc<dyn EventHandler>);

    /// Subscribe a synchronous handler.
    fn subscribe(&self, pattern: &str, handler: Arc<dyn EventHandler>) {
        self.subscribe_with_mode(pattern, DispatchMode::Synchronous, handler);
    }

    /// Subscribe a deferred handler.
    fn subscribe_deferred(&self, pattern: &str, handler: Arc<dyn EventHandler>) {
        self.subscribe_with_mode(pattern, DispatchMode::Deferred, handler);
    }
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
