//! ListCategoriesHandler - Query handler for paginated category search.

use std::sync::Arc;

use super::output::{CategoryOutput, CategoryOutputMapper};
use crate::config::PaginationConfig;
use crate::domain::category::CategoryError;
use crate::domain::foundation::{SearchInput, SearchParams, SearchResult};
use crate::ports::{CategoryFilter, CategoryRepository};

/// Handler for listing categories page by page.
pub struct ListCategoriesHandler {
    repository: Arc<dyn CategoryRepository>,
    pagination: PaginationConfig,
}

impl ListCategoriesHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Normalizes raw input, then searches.
    ///
    /// Bad paging or sort input is clamped, so only store errors surface.
    pub async fn handle(
        &self,
        input: SearchInput<CategoryFilter>,
    ) -> Result<SearchResult<CategoryOutput>, CategoryError> {
        let params = SearchParams::new(input, self.pagination.limits());

        let result = self.repository.search(&params).await?;

        Ok(result.map_items(|category| CategoryOutputMapper::to_output(&category)))
    }
}
