//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations over the repository ports.
//! Command handlers (create, update, delete) and query handlers (get, list)
//! share the `CategoryOutput` projection.

pub mod handlers;

pub use handlers::{
    CategoryOutput, CategoryOutputMapper, CreateCategoryHandler, DeleteCategoryCommand,
    DeleteCategoryHandler, GetCategoryHandler, GetCategoryQuery, ListCategoriesHandler,
    UpdateCategoryCommand, UpdateCategoryHandler,
};
