//! Category aggregate entity.
//!
//! Every construction path and every validated mutation passes the
//! Category rule table, so an invalid Category never exists in memory.

use serde::{Deserialize, Serialize};

use super::validator::CATEGORY_VALIDATOR;
use crate::domain::foundation::{
    Entity, EntityValidationError, FieldValue, Timestamp, Uuid, Validatable,
};

/// Category aggregate.
///
/// # Invariants
///
/// - `name` is non-blank and at most 255 characters
/// - `description`, when present, is at most 2000 characters
/// - `category_id` and `created_at` never change after construction
/// - Equality is identity equality (`category_id` only)
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    category_id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: Timestamp,
}

/// Constructor input, also used to rehydrate stored rows.
///
/// Missing values take defaults: a fresh id, no description, active, now.
#[derive(Debug, Clone, Default)]
pub struct CategoryProps {
    pub category_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<Timestamp>,
}

/// Command to create a new category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryCreateCommand {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CategoryCreateCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

impl Category {
    /// Builds a category from props, applying defaults and validating.
    ///
    /// # Errors
    ///
    /// - `EntityValidationError` if any rule fails
    pub fn new(props: CategoryProps) -> Result<Self, EntityValidationError> {
        let category = Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_default(),
        };
        category.validate()?;
        Ok(category)
    }

    /// Creates a brand-new category with a generated identifier.
    ///
    /// # Errors
    ///
    /// - `EntityValidationError` if any rule fails
    pub fn create(cmd: CategoryCreateCommand) -> Result<Self, EntityValidationError> {
        Self::new(CategoryProps {
            category_id: None,
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
            created_at: None,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Renames the category.
    ///
    /// On failure the category keeps its previous name.
    ///
    /// # Errors
    ///
    /// - `EntityValidationError` if the new name breaks a rule
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let previous = std::mem::replace(&mut self.name, name.into());
        if let Err(err) = self.validate() {
            self.name = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Replaces (or clears) the description.
    ///
    /// On failure the category keeps its previous description.
    ///
    /// # Errors
    ///
    /// - `EntityValidationError` if the new description breaks a rule
    pub fn change_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let previous = std::mem::replace(&mut self.description, description);
        if let Err(err) = self.validate() {
            self.description = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Runs the Category rule table against the current state.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        CATEGORY_VALIDATOR.validate(self)
    }
}

impl Entity for Category {
    type Id = Uuid;

    fn entity_id(&self) -> &Uuid {
        &self.category_id
    }
}

crate::impl_identity_eq!(Category);

impl Validatable for Category {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "category_id" => FieldValue::Text(self.category_id.as_str()),
            "name" => FieldValue::Text(&self.name),
            "description" => self
                .description
                .as_deref()
                .map_or(FieldValue::Null, FieldValue::Text),
            "is_active" => FieldValue::Bool(self.is_active),
            "created_at" => FieldValue::Time(&self.created_at),
            _ => FieldValue::Null,
        }
    }
}
