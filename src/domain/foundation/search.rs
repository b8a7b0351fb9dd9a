//! Pagination, filtering and sorting protocol for searchable repositories.
//!
//! Raw request input ([`SearchInput`]) is normalized into [`SearchParams`]
//! under explicit [`PageLimits`]. Invalid pagination or sort input never
//! fails; it is clamped to safe defaults. Repositories answer with a
//! [`SearchResult`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Default number of items per page.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Largest page size accepted before falling back to the default.
pub const MAX_PER_PAGE: u32 = 100;

/// Page size bounds applied when normalizing search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parses a direction case-insensitively; anything else is `Desc`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Repository-interpreted filter value.
pub trait SearchFilter: Clone + fmt::Debug + Send + Sync {
    /// An empty filter means "no filtering".
    fn is_empty_filter(&self) -> bool;
}

impl SearchFilter for String {
    fn is_empty_filter(&self) -> bool {
        self.is_empty()
    }
}

/// Raw, untrusted search input as it arrives from a request.
///
/// `page` and `per_page` accept any JSON value (numbers, numeric strings,
/// garbage); normalization happens in [`SearchParams::new`].
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "F: Deserialize<'de>"))]
pub struct SearchInput<F> {
    #[serde(default)]
    pub page: Option<Value>,
    #[serde(default)]
    pub per_page: Option<Value>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub sort_dir: Option<String>,
    #[serde(default)]
    pub filter: Option<F>,
}

impl<F> Default for SearchInput<F> {
    fn default() -> Self {
        Self {
            page: None,
            per_page: None,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

impl<F> SearchInput<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn sort_dir(mut self, sort_dir: impl Into<String>) -> Self {
        self.sort_dir = Some(sort_dir.into());
        self
    }

    pub fn filter(mut self, filter: F) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Normalized search parameters. Every field is bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams<F> {
    page: u32,
    per_page: u32,
    sort: Option<String>,
    sort_dir: SortDirection,
    filter: Option<F>,
}

impl<F: SearchFilter> SearchParams<F> {
    /// Normalizes raw input under the given page limits.
    ///
    /// 1. `page` not a positive integer → 1
    /// 2. `per_page` not a positive integer, or above the maximum → default
    /// 3. blank `sort` → none
    /// 4. `sort_dir` not `asc`/`desc` (case-insensitive) → `desc`
    /// 5. empty `filter` → none
    pub fn new(input: SearchInput<F>, limits: PageLimits) -> Self {
        let page = input
            .page
            .as_ref()
            .and_then(positive_integer)
            .unwrap_or(1);

        let per_page = input
            .per_page
            .as_ref()
            .and_then(positive_integer)
            .filter(|per_page| *per_page <= limits.max_per_page)
            .unwrap_or(limits.default_per_page);

        let sort = input.sort.filter(|sort| !sort.trim().is_empty());

        let sort_dir = input
            .sort_dir
            .as_deref()
            .map(SortDirection::parse_lenient)
            .unwrap_or_default();

        let filter = input.filter.filter(|filter| !filter.is_empty_filter());

        tracing::debug!(
            page,
            per_page,
            sort = sort.as_deref(),
            sort_dir = %sort_dir,
            "Normalized search params"
        );

        Self {
            page,
            per_page,
            sort,
            sort_dir,
            filter,
        }
    }

    /// Parameters for the first page with default limits and no filter.
    pub fn first_page() -> Self {
        Self::new(SearchInput::default(), PageLimits::default())
    }
}

impl<F> SearchParams<F> {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> SortDirection {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Number of rows to skip: `(page - 1) * per_page`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Maximum number of rows on a page.
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// Returns the sort field only if it is one of `sortable`.
    pub fn sort_within<'a>(&self, sortable: &[&'a str]) -> Option<&'a str> {
        let sort = self.sort.as_deref()?;
        sortable.iter().copied().find(|field| *field == sort)
    }
}

/// Converts an untyped value to a positive integer.
///
/// Accepts integers, integral floats and numeric strings.
fn positive_integer(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }?;
    u32::try_from(number).ok().filter(|n| *n > 0)
}

fn integral(value: f64) -> Option<u64> {
    if value.is_finite() && value.fract() == 0.0 && value >= 1.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// One page of search results with pagination metadata.
///
/// # Invariants
///
/// - `items.len() <= per_page`
/// - `total >= items.len()`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: u64,
    current_page: u32,
    per_page: u32,
    last_page: u32,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: u64, current_page: u32, per_page: u32) -> Self {
        debug_assert!(items.len() as u64 <= u64::from(per_page));
        debug_assert!(total >= items.len() as u64);

        let per_page = per_page.max(1);
        let last_page = (total + u64::from(per_page) - 1) / u64::from(per_page);
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: u32::try_from(last_page).unwrap_or(u32::MAX),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// `ceil(total / per_page)`; zero when nothing matched.
    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    /// Projects every item, keeping the pagination metadata.
    pub fn map_items<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(input: SearchInput<String>) -> SearchParams<String> {
        SearchParams::new(input, PageLimits::default())
    }

    #[test]
    fn defaults_when_input_is_empty() {
        let p = params(SearchInput::new());
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), DEFAULT_PER_PAGE);
        assert_eq!(p.sort(), None);
        assert_eq!(p.sort_dir(), SortDirection::Desc);
        assert_eq!(p.filter(), None);
    }

    #[test]
    fn clamps_invalid_pagination_and_direction() {
        let p = params(SearchInput::new().page(-5).per_page(9999).sort_dir("sideways"));
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), DEFAULT_PER_PAGE);
        assert_eq!(p.sort_dir(), SortDirection::Desc);
    }

    #[test]
    fn page_accepts_numeric_strings_and_integral_floats() {
        assert_eq!(params(SearchInput::new().page("3")).page(), 3);
        assert_eq!(params(SearchInput::new().page(" 4 ")).page(), 4);
        assert_eq!(params(SearchInput::new().page(2.0)).page(), 2);
    }

    #[test]
    fn page_rejects_non_integers() {
        for raw in [json!(0), json!(1.5), json!("abc"), json!(true), json!(null), json!({})] {
            assert_eq!(params(SearchInput::new().page(raw.clone())).page(), 1, "{raw}");
        }
    }

    #[test]
    fn per_page_keeps_values_within_limits() {
        assert_eq!(params(SearchInput::new().per_page(10)).per_page(), 10);
        assert_eq!(params(SearchInput::new().per_page(MAX_PER_PAGE)).per_page(), MAX_PER_PAGE);
        assert_eq!(
            params(SearchInput::new().per_page(MAX_PER_PAGE + 1)).per_page(),
            DEFAULT_PER_PAGE
        );
        assert_eq!(params(SearchInput::new().per_page(0)).per_page(), DEFAULT_PER_PAGE);
        assert_eq!(params(SearchInput::new().per_page("x")).per_page(), DEFAULT_PER_PAGE);
    }

    #[test]
    fn limits_are_explicit_configuration() {
        let limits = PageLimits {
            default_per_page: 5,
            max_per_page: 20,
        };
        let p: SearchParams<String> = SearchParams::new(SearchInput::new().per_page(50), limits);
        assert_eq!(p.per_page(), 5);
    }

    #[test]
    fn sort_dir_is_case_insensitive() {
        assert_eq!(params(SearchInput::new().sort_dir("ASC")).sort_dir(), SortDirection::Asc);
        assert_eq!(params(SearchInput::new().sort_dir("Desc")).sort_dir(), SortDirection::Desc);
    }

    #[test]
    fn padded_sort_dir_is_not_recognized() {
        assert_eq!(SortDirection::parse_lenient(" asc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse_lenient("asc "), SortDirection::Desc);
        assert_eq!(SortDirection::parse_lenient("aSc"), SortDirection::Asc);
    }

    #[test]
    fn sort_and_direction_are_independent() {
        let p = params(SearchInput::new().sort_dir("asc"));
        assert_eq!(p.sort(), None);
        assert_eq!(p.sort_dir(), SortDirection::Asc);

        let p = params(SearchInput::new().sort("name"));
        assert_eq!(p.sort(), Some("name"));
        assert_eq!(p.sort_dir(), SortDirection::Desc);
    }

    #[test]
    fn blank_sort_and_empty_filter_are_dropped() {
        let p = params(SearchInput::new().sort("  ").filter(String::new()));
        assert_eq!(p.sort(), None);
        assert_eq!(p.filter(), None);

        let p = params(SearchInput::new().filter("tech".to_string()));
        assert_eq!(p.filter().map(String::as_str), Some("tech"));
    }

    #[test]
    fn offset_and_limit_follow_page_window() {
        let p = params(SearchInput::new().page(3).per_page(15));
        assert_eq!(p.offset(), 30);
        assert_eq!(p.limit(), 15);
    }

    #[test]
    fn sort_within_only_accepts_declared_fields() {
        let p = params(SearchInput::new().sort("name"));
        assert_eq!(p.sort_within(&["name", "created_at"]), Some("name"));

        let p = params(SearchInput::new().sort("unsortable_field"));
        assert_eq!(p.sort_within(&["name", "created_at"]), None);
    }

    #[test]
    fn search_input_deserializes_untyped_values() {
        let input: SearchInput<String> = serde_json::from_value(json!({
            "page": "2",
            "per_page": 5,
            "sort": "name",
            "sort_dir": "ASC",
            "filter": "tech"
        }))
        .unwrap();
        let p = params(input);
        assert_eq!(p.page(), 2);
        assert_eq!(p.per_page(), 5);
        assert_eq!(p.sort(), Some("name"));
        assert_eq!(p.sort_dir(), SortDirection::Asc);
    }

    #[test]
    fn last_page_rounds_up() {
        let result: SearchResult<u8> = SearchResult::new(vec![0; 15], 37, 1, 15);
        assert_eq!(result.last_page(), 3);

        let result: SearchResult<u8> = SearchResult::new(vec![0; 15], 45, 1, 15);
        assert_eq!(result.last_page(), 3);

        let result: SearchResult<u8> = SearchResult::new(Vec::new(), 0, 1, 15);
        assert_eq!(result.last_page(), 0);
    }

    #[test]
    fn map_items_keeps_metadata() {
        let result = SearchResult::new(vec![1, 2], 12, 2, 10).map_items(|n| n * 10);
        assert_eq!(result.items(), &[10, 20]);
        assert_eq!(result.total(), 12);
        assert_eq!(result.current_page(), 2);
        assert_eq!(result.per_page(), 10);
        assert_eq!(result.last_page(), 2);
    }

    #[test]
    fn search_result_serializes_metadata() {
        let result = SearchResult::new(vec!["a"], 1, 1, 15);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            json!({
                "items": ["a"],
                "total": 1,
                "current_page": 1,
                "per_page": 15,
                "last_page": 1
            })
        );
    }
}
