//! Event bus configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound on deferred workers.
pub const MAX_WORKER_COUNT: usize = 64;

/// Deferred listener worker pool sizing
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Tasks draining the deferred queue
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    /// Deferred jobs buffered before publishers wait
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl EventsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.worker_count == 0 || self.worker_count > MAX_WORKER_COUNT {
            return Err(ValidationError::InvalidWorkerCount(MAX_WORKER_COUNT));
        }
        if self.queue_capacity == 0 {
            return Err(ValidationError::InvalidQueueCapacity);
        }
        Ok(())
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_worker_count() -> usize {
    4
}

fn default_queue_capacity() -> usize {
    1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_config_defaults() {
        let config = EventsConfig::default();
        assert_eq!(config.worker_count, 4);
        assert_eq!(config.queue_capacity, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_worker_count_bounds() {
        for worker_count in [0, 65] {
            let config = EventsConfig {
                worker_count,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidWorkerCount(64))
            );
        }
    }

    #[test]
    fn test_validation_zero_queue_capacity() {
        let config = EventsConfig {
            queue_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidQueueCapacity));
    }
}
