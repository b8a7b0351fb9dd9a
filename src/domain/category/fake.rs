//! Test-data builder for Category.
//!
//! Produces valid categories with predictable names and spaced creation
//! times, so ordering assertions do not depend on the wall clock.

use super::aggregate::{Category, CategoryProps};
use crate::domain::foundation::{EntityValidationError, Timestamp, Uuid};

const DEFAULT_NAME: &str = "category";

/// Builds one or many categories.
///
/// Item `i` is created `i` seconds after the base time. With more than one
/// item, names get a two-digit suffix (`category 00`, `category 01`, ...).
#[derive(Debug, Clone)]
pub struct CategoryFakeBuilder {
    count: usize,
    category_id: Option<Uuid>,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: Option<Timestamp>,
}

impl CategoryFakeBuilder {
    pub fn one() -> Self {
        Self::many(1)
    }

    pub fn many(count: usize) -> Self {
        Self {
            count,
            category_id: None,
            name: DEFAULT_NAME.to_string(),
            description: None,
            is_active: true,
            created_at: None,
        }
    }

    /// Fixes the identifier of the first item.
    pub fn with_category_id(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the name, or the name prefix when building many.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Sets the creation time of the first item.
    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the first item.
    ///
    /// # Errors
    ///
    /// - `EntityValidationError` if a supplied value breaks a rule
    pub fn build(&self) -> Result<Category, EntityValidationError> {
        self.item(0, self.base())
    }

    /// Builds every item.
    ///
    /// # Errors
    ///
    /// - `EntityValidationError` if a supplied value breaks a rule
    pub fn build_many(&self) -> Result<Vec<Category>, EntityValidationError> {
        let base = self.base();
        (0..self.count).map(|i| self.item(i, base)).collect()
    }

    fn base(&self) -> Timestamp {
        self.created_at.unwrap_or_else(|| Timestamp::now().minus_days(1))
    }

    fn item(&self, index: usize, base: Timestamp) -> Result<Category, EntityValidationError> {
        let name = if self.count > 1 {
            format!("{} {:02}", self.name, index)
        } else {
            self.name.clone()
        };

        Category::new(CategoryProps {
            category_id: if index == 0 { self.category_id.clone() } else { None },
            name,
            description: self.description.clone(),
            is_active: Some(self.is_active),
            created_at: Some(base.plus_secs(i64::try_from(index).unwrap_or(i64::MAX))),
        })
    }
}

impl Category {
    /// Starts a test-data builder.
    pub fn fake() -> CategoryFakeBuilder {
        CategoryFakeBuilder::one()
    }
}
