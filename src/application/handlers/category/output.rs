//! CategoryOutput - Serializable projection returned by every handler.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::category::Category;

/// Flat view of a Category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Projects entities onto `CategoryOutput`.
pub struct CategoryOutputMapper;

impl CategoryOutputMapper {
    pub fn to_output(category: &Category) -> CategoryOutput {
        CategoryOutput {
            category_id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: *category.created_at().as_datetime(),
        }
    }
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        CategoryOutputMapper::to_output(category)
    }
}
