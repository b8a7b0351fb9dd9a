//! DeleteCategoryHandler - Command handler for removing a category.

use std::sync::Arc;

use crate::domain::category::CategoryError;
use crate::domain::foundation::Uuid;
use crate::ports::CategoryRepository;

/// Command to delete a category.
#[derive(Debug, Clone)]
pub struct DeleteCategoryCommand {
    pub id: String,
}

/// Handler for deleting categories.
pub struct DeleteCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCategoryCommand) -> Result<(), CategoryError> {
        let id = Uuid::parse(cmd.id)?;

        self.repository.delete(&id).await?;

        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
