//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Authentication configuration (HS256 access tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret for signing and verifying tokens
    pub jwt_secret: SecretString,

    /// Lifetime of issued access tokens in seconds
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_secs: u64,

    /// Clock skew tolerated when checking expiry, in seconds
    #[serde(default)]
    pub leeway_secs: u64,
}

impl AuthConfig {
    pub fn access_token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_ttl_secs)
    }

    pub fn leeway(&self) -> Duration {
        Duration::from_secs(self.leeway_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production, the secret must be at least 32 bytes.
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        let secret_len = self.jwt_secret.expose_secret().len();
        if secret_len == 0 {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if environment.is_production() && secret_len < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }
        if self.access_token_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            access_token_ttl_secs: default_access_token_ttl(),
            leeway_secs: 0,
        }
    }
}

fn default_access_token_ttl() -> u64 {
    3600
}
