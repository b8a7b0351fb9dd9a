//! Repository doubles shared by the handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::category::Category;
use crate::domain::foundation::{
    DomainError, ErrorCode, Repository, SearchResult, SearchableRepository, Uuid,
};
use crate::ports::{CategoryFilter, CategorySearchParams, CATEGORY_SORTABLE_FIELDS};

/// Fails every call with `DatabaseError` and counts how often it was hit.
#[derive(Default)]
pub struct FailingCategoryRepository {
    calls: AtomicUsize,
}

impl FailingCategoryRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::new(
            ErrorCode::DatabaseError,
            "Simulated store failure",
        ))
    }
}

#[async_trait]
impl Repository<Category, Uuid> for FailingCategoryRepository {
    async fn insert(&self, _entity: &Category) -> Result<(), DomainError> {
        self.fail()
    }

    async fn bulk_insert(&self, _entities: &[Category]) -> Result<(), DomainError> {
        self.fail()
    }

    async fn update(&self, _entity: &Category) -> Result<(), DomainError> {
        self.fail()
    }

    async fn delete(&self, _id: &Uuid) -> Result<(), DomainError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: &Uuid) -> Result<Option<Category>, DomainError> {
        self.fail()
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        self.fail()
    }
}

#[async_trait]
impl SearchableRepository<Category, Uuid, CategoryFilter> for FailingCategoryRepository {
    fn sortable_fields(&self) -> &'static [&'static str] {
        CATEGORY_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        _params: &CategorySearchParams,
    ) -> Result<SearchResult<Category>, DomainError> {
        self.fail()
    }
}
