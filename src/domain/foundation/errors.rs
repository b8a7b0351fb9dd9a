//! Error types for the domain layer.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Field name mapped to every rule failure recorded for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A string that is not a canonical UUID was used as an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ID must be a valid UUID, got '{value}'")]
pub struct InvalidUuidError {
    pub value: String,
}

impl InvalidUuidError {
    /// Creates an error for the rejected value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// One or more validation rules failed for an entity.
///
/// Carries every violation, not just the first, so callers can report all
/// problems at once.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Entity validation failed: {}", summarize(.errors))]
pub struct EntityValidationError {
    errors: FieldErrors,
}

impl EntityValidationError {
    /// Wraps a violation map. The map should not be empty.
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }

    /// Returns the full violation map.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the messages recorded for one field.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Checks whether a field has at least one violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Consumes the error returning the violation map.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidIdentifier,

    // Lookup errors
    NotFound,
    AlreadyExists,

    // Infrastructure errors
    DataIntegrity,
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidIdentifier => "INVALID_IDENTIFIER",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::DataIntegrity => "DATA_INTEGRITY",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a not-found error for an entity kind and identifier.
    pub fn not_found(entity: &str, id: impl fmt::Display) -> Self {
        let id = id.to_string();
        Self::new(
            ErrorCode::NotFound,
            format!("{} Not Found using ID {}", entity, id),
        )
        .with_detail("entity", entity)
        .with_detail("id", id)
    }

    /// Creates a database error with context.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Checks if this error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<InvalidUuidError> for DomainError {
    fn from(err: InvalidUuidError) -> Self {
        DomainError::new(ErrorCode::InvalidIdentifier, err.to_string()).with_detail("id", err.value)
    }
}

impl From<EntityValidationError> for DomainError {
    fn from(err: EntityValidationError) -> Self {
        let message = err.to_string();
        err.into_errors().into_iter().fold(
            DomainError::new(ErrorCode::ValidationFailed, message),
            |acc, (field, messages)| acc.with_detail(field, messages.join(", ")),
        )
    }
}
