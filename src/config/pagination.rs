//! Pagination configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::{PageLimits, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Page-size bounds applied to every search.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when the caller gives none (or an invalid one)
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,

    /// Largest page size a caller may ask for
    #[serde(default = "max_per_page")]
    pub max_per_page: u32,
}

impl PaginationConfig {
    /// Limits handed to `SearchParams::new`.
    pub fn limits(&self) -> PageLimits {
        PageLimits {
            default_per_page: self.default_per_page,
            max_per_page: self.max_per_page,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_per_page == 0 {
            return Err(ValidationError::ZeroPageSize("default_per_page"));
        }
        if self.max_per_page == 0 {
            return Err(ValidationError::ZeroPageSize("max_per_page"));
        }
        if self.default_per_page > self.max_per_page {
            return Err(ValidationError::DefaultPageSizeAboveMax {
                default: self.default_per_page,
                max: self.max_per_page,
            });
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
            max_per_page: max_per_page(),
        }
    }
}

impl From<PaginationConfig> for PageLimits {
    fn from(config: PaginationConfig) -> Self {
        config.limits()
    }
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn max_per_page() -> u32 {
    MAX_PER_PAGE
}
