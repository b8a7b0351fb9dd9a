//! CreateCategoryHandler - Command handler for creating categories.

use std::sync::Arc;

use super::output::{CategoryOutput, CategoryOutputMapper};
use crate::domain::category::{Category, CategoryCreateCommand, CategoryError};
use crate::ports::CategoryRepository;

/// Handler for creating categories.
pub struct CreateCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CategoryCreateCommand) -> Result<CategoryOutput, CategoryError> {
        let category = Category::create(cmd)?;

        self.repository.insert(&category).await?;

        tracing::info!(category_id = %category.category_id(), "Category created");
        Ok(CategoryOutputMapper::to_output(&category))
    }
}
