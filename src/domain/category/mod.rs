//! Category module - the Category aggregate and its rules.

mod aggregate;
mod errors;
mod fake;
mod validator;

pub use aggregate::{Category, CategoryCreateCommand, CategoryProps};
pub use errors::CategoryError;
pub use fake::CategoryFakeBuilder;
pub use validator::{CATEGORY_VALIDATOR, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
