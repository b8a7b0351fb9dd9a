//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the validation gate, the search
//! protocol and the repository contracts every aggregate builds on.

mod errors;
mod ids;
mod repository;
mod search;
mod timestamp;
mod validation;
mod value_object;

pub use errors::{DomainError, EntityValidationError, ErrorCode, FieldErrors, InvalidUuidError};
pub use ids::Uuid;
pub use repository::{Repository, SearchableRepository};
pub use search::{
    PageLimits, SearchFilter, SearchInput, SearchParams, SearchResult, SortDirection,
    DEFAULT_PER_PAGE, MAX_PER_PAGE,
};
pub use timestamp::Timestamp;
pub use validation::{FieldKind, FieldRules, FieldValue, Rule, RuleValidator, Validatable};
pub use value_object::{Entity, ValueObject};
