//! Category command and query handlers.

mod create_category;
mod delete_category;
mod get_category;
mod list_categories;
mod output;
mod update_category;

#[cfg(test)]
mod testing;

pub use create_category::CreateCategoryHandler;
pub use delete_category::{DeleteCategoryCommand, DeleteCategoryHandler};
pub use get_category::{GetCategoryHandler, GetCategoryQuery};
pub use list_categories::ListCategoriesHandler;
pub use output::{CategoryOutput, CategoryOutputMapper};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryHandler};
