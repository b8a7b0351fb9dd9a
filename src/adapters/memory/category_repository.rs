//! In-memory implementation of CategoryRepository.
//!
//! Keeps rows (not entities) so every read goes through the same mapper and
//! validation as the database adapter. Useful for testing and development.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adapters::category_row::{CategoryModelMapper, CategoryRow};
use crate::domain::category::Category;
use crate::domain::foundation::{
    DomainError, ErrorCode, Repository, SearchResult, SearchableRepository, SortDirection, Uuid,
};
use crate::ports::{CategoryFilter, CategorySearchParams, CATEGORY_SORTABLE_FIELDS};

/// In-memory category store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    rows: Arc<RwLock<HashMap<uuid::Uuid, CategoryRow>>>,
}

impl InMemoryCategoryRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw row, bypassing entity construction (fixtures only)
    pub async fn insert_row(&self, row: CategoryRow) {
        self.rows.write().await.insert(row.category_id, row);
    }

    /// Get the number of stored rows
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Check whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.rows.write().await.clear();
    }
}

#[async_trait]
impl Repository<Category, Uuid> for InMemoryCategoryRepository {
    async fn insert(&self, entity: &Category) -> Result<(), DomainError> {
        let row = CategoryModelMapper::to_row(entity);
        let mut rows = self.rows.write().await;
        if rows.contains_key(&row.category_id) {
            return Err(duplicate(&row.category_id));
        }
        tracing::debug!(category_id = %row.category_id, "Inserting category");
        rows.insert(row.category_id, row);
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[Category]) -> Result<(), DomainError> {
        let batch: Vec<CategoryRow> = entities.iter().map(CategoryModelMapper::to_row).collect();
        let mut rows = self.rows.write().await;

        // Reject the whole batch before writing anything.
        let mut seen = std::collections::HashSet::new();
        for row in &batch {
            if rows.contains_key(&row.category_id) || !seen.insert(row.category_id) {
                return Err(duplicate(&row.category_id));
            }
        }

        tracing::debug!(count = batch.len(), "Bulk inserting categories");
        rows.extend(batch.into_iter().map(|row| (row.category_id, row)));
        Ok(())
    }

    async fn update(&self, entity: &Category) -> Result<(), DomainError> {
        let row = CategoryModelMapper::to_row(entity);
        let mut rows = self.rows.write().await;
        match rows.get_mut(&row.category_id) {
            Some(slot) => {
                tracing::debug!(category_id = %row.category_id, "Updating category");
                *slot = row;
                Ok(())
            }
            None => Err(DomainError::not_found("Category", entity.category_id())),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        if rows.remove(&id.as_uuid()).is_none() {
            return Err(DomainError::not_found("Category", id));
        }
        tracing::debug!(category_id = %id, "Deleted category");
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError> {
        let row = self.rows.read().await.get(&id.as_uuid()).cloned();
        row.map(CategoryModelMapper::to_entity).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let mut rows: Vec<CategoryRow> = self.rows.read().await.values().cloned().collect();
        rows.sort_by(|a, b| compare_rows(a, b, None, SortDirection::Desc));
        rows.into_iter().map(CategoryModelMapper::to_entity).collect()
    }
}

#[async_trait]
impl SearchableRepository<Category, Uuid, CategoryFilter> for InMemoryCategoryRepository {
    fn sortable_fields(&self) -> &'static [&'static str] {
        CATEGORY_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &CategorySearchParams,
    ) -> Result<SearchResult<Category>, DomainError> {
        let needle = params.filter().map(|filter| filter.to_lowercase());

        let mut matching: Vec<CategoryRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| {
                needle
                    .as_deref()
                    .map_or(true, |needle| row.name.to_lowercase().contains(needle))
            })
            .cloned()
            .collect();

        let sort = params.sort_within(self.sortable_fields());
        let direction = match sort {
            Some(_) => params.sort_dir(),
            None => SortDirection::Desc,
        };
        matching.sort_by(|a, b| compare_rows(a, b, sort, direction));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(params.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(params.limit()).unwrap_or(usize::MAX))
            .map(CategoryModelMapper::to_entity)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            page = params.page(),
            per_page = params.per_page(),
            total,
            returned = items.len(),
            "Searched categories"
        );

        Ok(SearchResult::new(items, total, params.page(), params.per_page()))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Orders rows by `sort` (default `created_at`), breaking ties by identifier.
fn compare_rows(
    a: &CategoryRow,
    b: &CategoryRow,
    sort: Option<&str>,
    direction: SortDirection,
) -> Ordering {
    let primary = match sort {
        Some("name") => a.name.cmp(&b.name),
        _ => a.created_at.cmp(&b.created_at),
    };
    let primary = match direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };
    primary.then_with(|| a.category_id.cmp(&b.category_id))
}

fn duplicate(id: &uuid::Uuid) -> DomainError {
    DomainError::new(
        ErrorCode::AlreadyExists,
        format!("Category already exists: {}", id),
    )
    .with_detail("id", id.to_string())
}
