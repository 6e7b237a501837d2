//! HTTP layer settings: request timeout and CORS

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Longest request timeout accepted, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Settings read by the router's outer layers.
///
/// `cors_origins` comes from a comma-separated variable:
/// `BIF__HTTP__CORS_ORIGINS=https://app.bif.kr,https://guardian.bif.kr`.
/// A single `*` allows any origin and is refused in production.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout(MAX_REQUEST_TIMEOUT_SECS));
        }

        if self.allows_any_origin() {
            if environment.is_production() {
                return Err(ValidationError::WildcardCorsInProduction);
            }
            return Ok(());
        }

        for origin in &self.cors_origins {
            let is_web_origin = origin.starts_with("http://") || origin.starts_with("https://");
            if !is_web_origin || origin.ends_with('/') || origin.contains(char::is_whitespace) {
                return Err(ValidationError::InvalidCorsOrigin(origin.clone()));
            }
        }
        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            cors_origins: Vec::new(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}
