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

    #[error("Invalid database URL format (expected postgres:// or postgresql://)")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections ({min}) exceeds max_connections ({max})")]
    InvalidPoolSize { min: u32, max: u32 },

    #[error("Pool size {0} exceeds maximum allowed (100)")]
    PoolSizeTooLarge(u32),

    #[error("Page size must be positive: {0}")]
    ZeroPageSize(&'static str),

    #[error("Default page size ({default}) exceeds maximum page size ({max})")]
    DefaultPageSizeAboveMax { default: u32, max: u32 },

    #[error("Unknown log level or filter directive: {0}")]
    InvalidLogLevel(String),
}
