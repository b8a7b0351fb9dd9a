//! Ports - Interfaces between the domain and the outside world.
//!
//! The application layer depends on these traits; adapters implement them.

mod category_repository;

pub use category_repository::{
    CategoryFilter, CategoryRepository, CategorySearchParams, CategorySearchResult,
    CATEGORY_SORTABLE_FIELDS,
};
