//! UpdateCategoryHandler - Command handler for changing a category.

use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use super::output::{CategoryOutput, CategoryOutputMapper};
use crate::domain::category::CategoryError;
use crate::domain::foundation::Uuid;
use crate::ports::CategoryRepository;

/// Partial update of a category.
///
/// `description` distinguishes "leave alone" (`None`) from "clear"
/// (`Some(None)`); in JSON that is a missing key versus `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Handler for updating categories.
pub struct UpdateCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl UpdateCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateCategoryCommand) -> Result<CategoryOutput, CategoryError> {
        let id = Uuid::parse(cmd.id)?;

        let mut category = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| CategoryError::not_found(id.as_str()))?;

        // An empty name means "not given".
        if let Some(name) = cmd.name.filter(|name| !name.is_empty()) {
            category.change_name(name)?;
        }
        if let Some(description) = cmd.description {
            category.change_description(description)?;
        }
        match cmd.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        self.repository.update(&category).await?;

        tracing::info!(category_id = %id, "Category updated");
        Ok(CategoryOutputMapper::to_output(&category))
    }
}
