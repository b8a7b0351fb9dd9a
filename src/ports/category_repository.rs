//! Category repository port.
//!
//! Defines the contract for persisting, retrieving and searching Category
//! aggregates. Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **Searchable**: full CRUD plus paginated, filtered, sorted `search`
//! - **Filter**: a case-insensitive substring match against `name`
//! - **Sortable fields**: `name`, `created_at`

use crate::domain::category::Category;
use crate::domain::foundation::{SearchParams, SearchResult, SearchableRepository, Uuid};

/// Filter accepted by Category searches (substring of `name`).
pub type CategoryFilter = String;

/// Normalized search parameters for categories.
pub type CategorySearchParams = SearchParams<CategoryFilter>;

/// One page of categories.
pub type CategorySearchResult = SearchResult<Category>;

/// Fields a Category search may order by.
pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

/// Repository port for Category aggregate persistence.
pub trait CategoryRepository: SearchableRepository<Category, Uuid, CategoryFilter> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category, Uuid, CategoryFilter> {}
