//! Request context carried into command handlers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Who issued a command and which request it belongs to.
///
/// Handlers copy these values onto the events they publish, so every event
/// raised while serving one request shares a correlation id.
///
/// ```ignore
/// let metadata = CommandMetadata::new(identity.user_id())
///     .with_correlation_id(request_id);
/// handler.handle(cmd, metadata).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    pub user_id: UserId,

    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Where the command came from, e.g. `"api"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            source: None,
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    pub fn test_fixture() -> Self {
        Self::new(UserId::new(42).unwrap())
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}
