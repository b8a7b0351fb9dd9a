//! Logging configuration

use serde::Deserialize;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Level (`info`) or filter directive (`info,category_catalog=debug`)
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Returns `false`
    /// when a subscriber was already installed; the existing one is kept.
    pub fn init_tracing(&self) -> bool {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        };

        match result {
            Ok(()) => {
                tracing::debug!(level = %self.level, format = ?self.format, "Tracing initialized");
                true
            }
            Err(_) => false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let level = self.level.trim();
        let valid = if level.contains('=') || level.contains(',') {
            EnvFilter::try_new(level).is_ok()
        } else {
            tracing::Level::from_str(level).is_ok() || level.eq_ignore_ascii_case("off")
        };

        if valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidLogLevel(self.level.clone()))
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pretty_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn accepts_levels_and_directives() {
        for level in ["trace", "DEBUG", "warn", "error", "off", "info,category_catalog=debug"] {
            let config = LoggingConfig {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "rejected {level}");
        }
    }

    #[test]
    fn rejects_unknown_level() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }

    #[test]
    fn second_init_is_a_no_op() {
        let config = LoggingConfig::default();
        config.init_tracing();
        assert!(!config.init_tracing());
    }
}
