//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CATEGORY_CATALOG` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use category_catalog::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing();
//! ```

mod database;
mod error;
mod logging;
mod pagination;

pub use database::{DatabaseConfig, MAX_POOL_SIZE};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use pagination::PaginationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Page-size bounds for searches
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CATEGORY_CATALOG` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CATEGORY_CATALOG__DATABASE__URL=...` -> `database.url = ...`
    /// - `CATEGORY_CATALOG__PAGINATION__MAX_PER_PAGE=50` -> `pagination.max_per_page = 50`
    /// - `CATEGORY_CATALOG__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CATEGORY_CATALOG")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, checking database,
    /// pagination, then logging.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.pagination.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var(
            "CATEGORY_CATALOG__DATABASE__URL",
            "postgresql://test@localhost/catalog",
        );
    }

    fn clear_env() {
        for key in [
            "CATEGORY_CATALOG__DATABASE__URL",
            "CATEGORY_CATALOG__DATABASE__MAX_CONNECTIONS",
            "CATEGORY_CATALOG__PAGINATION__DEFAULT_PER_PAGE",
            "CATEGORY_CATALOG__PAGINATION__MAX_PER_PAGE",
            "CATEGORY_CATALOG__LOGGING__LEVEL",
            "CATEGORY_CATALOG__LOGGING__FORMAT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_from_environment_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.database.url, "postgresql://test@localhost/catalog");
        assert_eq!(config.pagination, PaginationConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_values_override_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CATEGORY_CATALOG__DATABASE__MAX_CONNECTIONS", "25");
        env::set_var("CATEGORY_CATALOG__PAGINATION__MAX_PER_PAGE", "50");
        env::set_var("CATEGORY_CATALOG__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.database.max_connections, 25);
        assert_eq!(config.pagination.max_per_page, 50);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn validate_reports_pagination_errors() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CATEGORY_CATALOG__PAGINATION__DEFAULT_PER_PAGE", "200");
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(
            config.validate(),
            Err(ValidationError::DefaultPageSizeAboveMax {
                default: 200,
                max: 100
            })
        );
    }

    #[test]
    fn validate_reports_log_level_errors() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CATEGORY_CATALOG__LOGGING__LEVEL", "shouty");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidLogLevel(_)))
        ));
    }
}
