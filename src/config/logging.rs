//! Log filter and output format

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;
use super::server::Environment;

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON in production, human-readable elsewhere.
    #[default]
    Auto,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` still wins when set.
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn json_output(&self, environment: Environment) -> bool {
        match self.format {
            LogFormat::Auto => environment.is_production(),
            LogFormat::Pretty => false,
            LogFormat::Json => true,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "info,bif_server=debug,tower_http=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_format_follows_environment() {
        let config = LoggingConfig::default();
        assert!(!config.json_output(Environment::Development));
        assert!(config.json_output(Environment::Production));
    }

    #[test]
    fn test_explicit_format_overrides_environment() {
        let pretty = LoggingConfig {
            format: LogFormat::Pretty,
            ..Default::default()
        };
        let json = LoggingConfig {
            format: LogFormat::Json,
            ..Default::default()
        };
        assert!(!pretty.json_output(Environment::Production));
        assert!(json.json_output(Environment::Development));
    }

    #[test]
    fn test_default_filter_is_valid() {
        assert!(LoggingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = LoggingConfig {
            filter: "bif_server=loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }
}
