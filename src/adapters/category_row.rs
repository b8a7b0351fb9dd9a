//! Storage row for categories and the entity ↔ row mapper.
//!
//! This is the only place where a `Category` is translated to or from its
//! stored form. Columns map 1:1 to entity attributes.

use chrono::{DateTime, Utc};

use crate::domain::category::{Category, CategoryProps};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, Uuid};

/// One row of the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CategoryRow {
    pub category_id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Translates between `Category` entities and `CategoryRow`s.
pub struct CategoryModelMapper;

impl CategoryModelMapper {
    /// Projects an entity onto its row.
    pub fn to_row(entity: &Category) -> CategoryRow {
        CategoryRow {
            category_id: entity.category_id().as_uuid(),
            name: entity.name().to_string(),
            description: entity.description().map(str::to_string),
            is_active: entity.is_active(),
            created_at: *entity.created_at().as_datetime(),
        }
    }

    /// Rehydrates a row, re-running validation.
    ///
    /// # Errors
    ///
    /// - `DataIntegrity` if the stored values no longer pass validation
    pub fn to_entity(row: CategoryRow) -> Result<Category, DomainError> {
        let category_id = row.category_id;
        Category::new(CategoryProps {
            category_id: Some(Uuid::from_uuid(row.category_id)),
            name: row.name,
            description: row.description,
            is_active: Some(row.is_active),
            created_at: Some(Timestamp::from_datetime(row.created_at)),
        })
        .map_err(|err| {
            tracing::error!(%category_id, error = %err, "Stored category failed validation");
            DomainError::new(
                ErrorCode::DataIntegrity,
                format!("Category {} failed validation on load: {}", category_id, err),
            )
            .with_detail("id", category_id.to_string())
        })
    }
}
