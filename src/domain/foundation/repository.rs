//! Base repository traits for persistence operations.
//!
//! `Repository<E, ID>` defines the CRUD contract shared by every aggregate
//! repository; `SearchableRepository<E, ID, F>` adds the paginated, filtered,
//! sorted `search` query.
//!
//! # Example
//!
//! ```ignore
//! // Aggregate-specific port narrows the generic contract
//! pub trait CategoryRepository: SearchableRepository<Category, Uuid, CategoryFilter> {}
//!
//! // Handlers only know about the port
//! pub struct CreateCategoryHandler {
//!     repository: Arc<dyn CategoryRepository>,
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::{DomainError, SearchFilter, SearchParams, SearchResult};

/// Base trait for aggregate repositories.
///
/// # Type Parameters
///
/// - `E`: The entity type being persisted
/// - `ID`: The identifier type for the entity
///
/// # Not-found convention
///
/// Lookups (`find_by_id`) return `Ok(None)` for a missing entity; mutations
/// (`update`, `delete`) fail with `ErrorCode::NotFound`. Every implementation
/// follows the same convention.
///
/// # Error Handling
///
/// All methods return `Result<_, DomainError>`. Implementations convert
/// adapter-specific errors (e.g., database errors) at their boundary and never
/// retry them.
#[async_trait]
pub trait Repository<E, ID>: Send + Sync
where
    E: Send + Sync,
    ID: Send + Sync + Debug,
{
    /// Persists a new entity.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` / `DatabaseError` if the identifier is taken
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, entity: &E) -> Result<(), DomainError>;

    /// Persists many entities in one batch.
    ///
    /// Partial-failure behavior is store-dependent: this layer makes no
    /// rollback guarantee.
    async fn bulk_insert(&self, entities: &[E]) -> Result<(), DomainError>;

    /// Overwrites the mutable attributes of an existing entity.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no entity has this identifier
    async fn update(&self, entity: &E) -> Result<(), DomainError>;

    /// Removes an entity.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no entity has this identifier
    async fn delete(&self, id: &ID) -> Result<(), DomainError>;

    /// Finds an entity by its identifier.
    ///
    /// Returns `Ok(None)` if the entity doesn't exist.
    async fn find_by_id(&self, id: &ID) -> Result<Option<E>, DomainError>;

    /// Returns every entity, newest first.
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;

    /// Checks if an entity with the given ID exists.
    ///
    /// Default implementation uses `find_by_id`.
    async fn exists(&self, id: &ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Repository that also answers paginated, filtered, sorted queries.
#[async_trait]
pub trait SearchableRepository<E, ID, F>: Repository<E, ID>
where
    E: Send + Sync,
    ID: Send + Sync + Debug,
    F: SearchFilter + 'static,
{
    /// Fields `search` may order by. Anything else falls back to the default
    /// order (`created_at` descending).
    fn sortable_fields(&self) -> &'static [&'static str];

    /// Runs a search.
    ///
    /// The total count honors the filter and ignores the page window. Rows that
    /// fail validation on load fail the whole call (`DataIntegrity`).
    async fn search(&self, params: &SearchParams<F>) -> Result<SearchResult<E>, DomainError>;
}
