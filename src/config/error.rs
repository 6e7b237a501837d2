//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Request timeout must be between 1 and {0} seconds")]
    InvalidTimeout(u64),

    #[error("Invalid CORS origin: {0:?}")]
    InvalidCorsOrigin(String),

    #[error("Wildcard CORS origin is not allowed in production")]
    WildcardCorsInProduction,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),

    #[error("JWT secret must be at least {0} bytes in production")]
    JwtSecretTooShort(usize),

    #[error("Access token TTL must be positive")]
    InvalidTokenTtl,

    #[error("Event worker count must be between 1 and {0}")]
    InvalidWorkerCount(usize),

    #[error("Event queue capacity must be positive")]
    InvalidQueueCapacity,
}
