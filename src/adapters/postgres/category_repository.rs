//! PostgreSQL implementation of CategoryRepository.
//!
//! Persists Category aggregates to the `categories` table. Every row read
//! back goes through `CategoryModelMapper`, so corrupt rows fail the call.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row};

use crate::adapters::category_row::{CategoryModelMapper, CategoryRow};
use crate::domain::category::Category;
use crate::domain::foundation::{
    DomainError, ErrorCode, Repository, SearchResult, SearchableRepository, SortDirection, Uuid,
};
use crate::ports::{CategoryFilter, CategorySearchParams, CATEGORY_SORTABLE_FIELDS};

const SELECT_COLUMNS: &str = "SELECT category_id, name, description, is_active, created_at";

/// PostgreSQL implementation of CategoryRepository.
#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new PostgresCategoryRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Category, Uuid> for PostgresCategoryRepository {
    async fn insert(&self, entity: &Category) -> Result<(), DomainError> {
        let row = CategoryModelMapper::to_row(entity);

        sqlx::query(
            r#"
            INSERT INTO categories (category_id, name, description, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(row.category_id)
        .bind(&row.name)
        .bind(&row.description)
        .bind(row.is_active)
        .bind(row.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            write_error("Failed to insert category", e)
                .with_detail("id", row.category_id.to_string())
        })?;

        tracing::debug!(category_id = %row.category_id, "Inserted category");
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[Category]) -> Result<(), DomainError> {
        if entities.is_empty() {
            return Ok(());
        }

        let rows: Vec<CategoryRow> = entities.iter().map(CategoryModelMapper::to_row).collect();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO categories (category_id, name, description, is_active, created_at) ",
        );
        builder.push_values(&rows, |mut b, row| {
            b.push_bind(row.category_id)
                .push_bind(&row.name)
                .push_bind(&row.description)
                .push_bind(row.is_active)
                .push_bind(row.created_at);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("Failed to bulk insert categories", e))?;

        tracing::debug!(count = rows.len(), "Bulk inserted categories");
        Ok(())
    }

    async fn update(&self, entity: &Category) -> Result<(), DomainError> {
        let row = CategoryModelMapper::to_row(entity);

        let result = sqlx::query(
            r#"
            UPDATE categories SET
                name = $2,
                description = $3,
                is_active = $4
            WHERE category_id = $1
            "#,
        )
        .bind(row.category_id)
        .bind(&row.name)
        .bind(&row.description)
        .bind(row.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update category", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Category", entity.category_id()));
        }

        tracing::debug!(category_id = %row.category_id, "Updated category");
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete category", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Category", id));
        }

        tracing::debug!(category_id = %id, "Deleted category");
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(&format!(
            "{} FROM categories WHERE category_id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch category", e))?;

        row.map(CategoryModelMapper::to_entity).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(&format!(
            "{} FROM categories ORDER BY created_at DESC, category_id ASC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch categories", e))?;

        rows.into_iter().map(CategoryModelMapper::to_entity).collect()
    }

    async fn exists(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM categories WHERE category_id = $1")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to check category existence", e))?;

        Ok(result.0 > 0)
    }
}

#[async_trait]
impl SearchableRepository<Category, Uuid, CategoryFilter> for PostgresCategoryRepository {
    fn sortable_fields(&self) -> &'static [&'static str] {
        CATEGORY_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &CategorySearchParams,
    ) -> Result<SearchResult<Category>, DomainError> {
        let pattern = params.filter().map(|filter| contains_pattern(filter));
        let sort = params.sort_within(self.sortable_fields());
        let direction = match sort {
            Some(_) => params.sort_dir(),
            None => SortDirection::Desc,
        };

        let mut page_query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "{}, COUNT(*) OVER () AS total_count FROM categories",
            SELECT_COLUMNS
        ));
        push_filter(&mut page_query, pattern.as_deref());
        page_query
            .push(" ORDER BY ")
            .push(order_column(sort))
            .push(" ")
            .push(order_keyword(direction))
            .push(", category_id ASC LIMIT ")
            .push_bind(to_i64(params.limit()))
            .push(" OFFSET ")
            .push_bind(to_i64(params.offset()));

        let page = page_query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to search categories", e))?;

        // The window count only rides along with returned rows; past the last
        // page it has to be asked for separately.
        let total: i64 = match page.first() {
            Some(first) => first
                .try_get("total_count")
                .map_err(|e| DomainError::database("Failed to read category count", e))?,
            None => {
                let mut count_query: QueryBuilder<Postgres> =
                    QueryBuilder::new("SELECT COUNT(*) FROM categories");
                push_filter(&mut count_query, pattern.as_deref());
                let (total,): (i64,) = count_query
                    .build_query_as()
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| DomainError::database("Failed to count categories", e))?;
                total
            }
        };

        let rows = page
            .iter()
            .map(CategoryRow::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::database("Failed to decode category row", e))?;

        let items = rows
            .into_iter()
            .map(CategoryModelMapper::to_entity)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            page = params.page(),
            per_page = params.per_page(),
            total,
            returned = items.len(),
            "Searched categories"
        );

        Ok(SearchResult::new(
            items,
            u64::try_from(total).unwrap_or(0),
            params.page(),
            params.per_page(),
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, pattern: Option<&str>) {
    if let Some(pattern) = pattern {
        builder
            .push(" WHERE name ILIKE ")
            .push_bind(pattern.to_string())
            .push(r" ESCAPE '\'");
    }
}

/// Escapes LIKE metacharacters so the filter matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_pattern(filter: &str) -> String {
    format!("%{}%", escape_like(filter))
}

/// Maps a declared sort field to its column. Never interpolates caller input.
///
/// Names compare by code point (`C` collation), the same order as `str::cmp`
/// in the in-memory adapter.
fn order_column(sort: Option<&str>) -> &'static str {
    match sort {
        Some("name") => r#"name COLLATE "C""#,
        _ => "created_at",
    }
}

fn order_keyword(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn write_error(context: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return DomainError::new(
                ErrorCode::AlreadyExists,
                format!("{}: category already exists", context),
            );
        }
    }
    DomainError::database(context, err)
}
