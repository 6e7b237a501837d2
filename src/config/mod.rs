//! Runtime configuration for the BIF server.
//!
//! Everything comes from `BIF__<SECTION>__<KEY>` environment variables, with
//! a `.env` file read first in development:
//!
//! | Section   | Keys | Consumer |
//! |-----------|------|----------|
//! | `server`  | `HOST`, `PORT`, `ENVIRONMENT` | listener in `main` |
//! | `http`    | `REQUEST_TIMEOUT_SECS`, `CORS_ORIGINS` (comma-separated) | router layers |
//! | `logging` | `FILTER`, `FORMAT` (`auto`, `pretty`, `json`) | tracing subscriber |
//! | `auth`    | `JWT_SECRET` (required), `ACCESS_TOKEN_TTL_SECS`, `LEEWAY_SECS` | JWT adapter |
//! | `events`  | `WORKER_COUNT`, `QUEUE_CAPACITY` | in-process event bus |
//!
//! Loading only checks types. [`AppConfig::validate`] applies the rules that
//! depend on the environment, so `main` runs both before building anything.

mod auth;
mod error;
mod events;
mod http;
mod logging;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use error::{ConfigError, ValidationError};
pub use events::{EventsConfig, MAX_WORKER_COUNT};
pub use http::{HttpConfig, MAX_REQUEST_TIMEOUT_SECS};
pub use logging::{LogFormat, LoggingConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "BIF";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// No default: the signing secret must be provided.
    pub auth: AuthConfig,

    #[serde(default)]
    pub events: EventsConfig,
}

impl AppConfig {
    /// Reads `.env` (if present) and the `BIF__` environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("http.cors_origins"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section against the configured environment.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let environment = self.server.environment;

        self.server.validate()?;
        self.http.validate(environment)?;
        self.logging.validate()?;
        self.auth.validate(environment)?;
        self.events.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Whether logs should be emitted as JSON.
    pub fn json_logs(&self) -> bool {
        self.logging.json_output(self.server.environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const PRODUCTION_SECRET: &str = "0123456789abcdef0123456789abcdef";

    /// Runs `f` with exactly `vars` set among the `BIF__` variables it uses.
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = f();
        for (key, _) in vars {
            env::remove_var(key);
        }
        result
    }

    #[test]
    fn test_secret_alone_is_enough() {
        let config = with_env(&[("BIF__AUTH__JWT_SECRET", "dev-secret")], AppConfig::load)
            .unwrap();

        assert_eq!(config.auth.jwt_secret.expose_secret(), "dev-secret");
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.http, HttpConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.events.worker_count, 4);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_secret_fails_to_load() {
        let result = with_env(&[("BIF__SERVER__PORT", "9000")], AppConfig::load);

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_sections_are_read_from_nested_keys() {
        let config = with_env(
            &[
                ("BIF__AUTH__JWT_SECRET", "dev-secret"),
                ("BIF__AUTH__LEEWAY_SECS", "5"),
                ("BIF__SERVER__HOST", "127.0.0.1"),
                ("BIF__SERVER__PORT", "3000"),
                ("BIF__HTTP__REQUEST_TIMEOUT_SECS", "10"),
                ("BIF__LOGGING__FORMAT", "json"),
                ("BIF__EVENTS__QUEUE_CAPACITY", "16"),
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.auth.leeway_secs, 5);
        assert_eq!(config.http.request_timeout_secs, 10);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.json_logs());
        assert_eq!(config.events.queue_capacity, 16);
    }

    #[test]
    fn test_cors_origins_split_on_commas() {
        let config = with_env(
            &[
                ("BIF__AUTH__JWT_SECRET", "dev-secret"),
                (
                    "BIF__HTTP__CORS_ORIGINS",
                    "http://localhost:5173,https://guardian.bif.kr",
                ),
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(
            config.http.cors_origins,
            vec!["http://localhost:5173", "https://guardian.bif.kr"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hostname_is_not_a_bind_address() {
        let result = with_env(
            &[
                ("BIF__AUTH__JWT_SECRET", "dev-secret"),
                ("BIF__SERVER__HOST", "localhost"),
            ],
            AppConfig::load,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_production_tightens_validation() {
        let short_secret = with_env(
            &[
                ("BIF__AUTH__JWT_SECRET", "dev-secret"),
                ("BIF__SERVER__ENVIRONMENT", "production"),
            ],
            AppConfig::load,
        )
        .unwrap();
        assert!(short_secret.is_production());
        assert!(short_secret.json_logs());
        assert_eq!(
            short_secret.validate(),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES))
        );

        let wildcard = with_env(
            &[
                ("BIF__AUTH__JWT_SECRET", PRODUCTION_SECRET),
                ("BIF__SERVER__ENVIRONMENT", "production"),
                ("BIF__HTTP__CORS_ORIGINS", "*"),
            ],
            AppConfig::load,
        )
        .unwrap();
        assert_eq!(
            wildcard.validate(),
            Err(ValidationError::WildcardCorsInProduction)
        );
    }
}
