//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod category;

pub use category::{
    CategoryOutput, CategoryOutputMapper, CreateCategoryHandler, DeleteCategoryCommand,
    DeleteCategoryHandler, GetCategoryHandler, GetCategoryQuery, ListCategoriesHandler,
    UpdateCategoryCommand, UpdateCategoryHandler,
};
