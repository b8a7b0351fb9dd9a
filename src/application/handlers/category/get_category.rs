//! GetCategoryHandler - Query handler for retrieving one category.

use std::sync::Arc;

use super::output::{CategoryOutput, CategoryOutputMapper};
use crate::domain::category::CategoryError;
use crate::domain::foundation::Uuid;
use crate::ports::CategoryRepository;

/// Query to get a category by ID.
#[derive(Debug, Clone)]
pub struct GetCategoryQuery {
    pub id: String,
}

/// Handler for retrieving category details.
pub struct GetCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetCategoryQuery) -> Result<CategoryOutput, CategoryError> {
        let id = Uuid::parse(query.id)?;

        let category = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| CategoryError::not_found(id.as_str()))?;

        Ok(CategoryOutputMapper::to_output(&category))
    }
}
