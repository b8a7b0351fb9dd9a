//! Category-specific error types.

use crate::domain::foundation::{
    DomainError, EntityValidationError, ErrorCode, InvalidUuidError,
};

/// Category-specific errors surfaced by the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// Category was not found.
    NotFound(String),
    /// A category with this identifier is already stored.
    AlreadyExists(String),
    /// Identifier was not a valid UUID.
    InvalidIdentifier(InvalidUuidError),
    /// One or more field rules failed.
    Validation(EntityValidationError),
    /// A stored category no longer passes validation.
    DataIntegrity(String),
    /// Infrastructure error (store, connection).
    Infrastructure(String),
}

impl CategoryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        CategoryError::NotFound(id.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CategoryError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            CategoryError::NotFound(_) => ErrorCode::NotFound,
            CategoryError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            CategoryError::InvalidIdentifier(_) => ErrorCode::InvalidIdentifier,
            CategoryError::Validation(_) => ErrorCode::ValidationFailed,
            CategoryError::DataIntegrity(_) => ErrorCode::DataIntegrity,
            CategoryError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            CategoryError::NotFound(id) => format!("Category Not Found using ID {}", id),
            CategoryError::AlreadyExists(id) => format!("Category already exists: {}", id),
            CategoryError::InvalidIdentifier(err) => err.to_string(),
            CategoryError::Validation(err) => err.to_string(),
            CategoryError::DataIntegrity(msg) => format!("Corrupt category record: {}", msg),
            CategoryError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CategoryError {}

impl From<DomainError> for CategoryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => CategoryError::NotFound(
                err.details
                    .get("id")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            ErrorCode::InvalidIdentifier => CategoryError::InvalidIdentifier(InvalidUuidError::new(
                err.details.get("id").cloned().unwrap_or_default(),
            )),
            ErrorCode::AlreadyExists => CategoryError::AlreadyExists(
                err.details
                    .get("id")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            ErrorCode::ValidationFailed => {
                let errors = err
                    .details
                    .iter()
                    .map(|(field, messages)| {
                        let messages = messages.split(", ").map(str::to_string).collect();
                        (field.clone(), messages)
                    })
                    .collect();
                CategoryError::Validation(EntityValidationError::new(errors))
            }
            ErrorCode::DataIntegrity => CategoryError::DataIntegrity(err.message),
            _ => CategoryError::Infrastructure(err.to_string()),
        }
    }
}

impl From<EntityValidationError> for CategoryError {
    fn from(err: EntityValidationError) -> Self {
        CategoryError::Validation(err)
    }
}

impl From<InvalidUuidError> for CategoryError {
    fn from(err: InvalidUuidError) -> Self {
        CategoryError::InvalidIdentifier(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FieldErrors;

    #[test]
    fn not_found_domain_error_keeps_identifier() {
        let err: CategoryError = DomainError::not_found("Category", "abc").into();
        assert_eq!(err, CategoryError::NotFound("abc".to_string()));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Category Not Found using ID abc");
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err: CategoryError =
            DomainError::new(ErrorCode::DatabaseError, "connection refused").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(matches!(err, CategoryError::Infrastructure(_)));
    }

    #[test]
    fn already_exists_keeps_its_code() {
        let err: CategoryError = DomainError::new(ErrorCode::AlreadyExists, "duplicate")
            .with_detail("id", "abc")
            .into();
        assert_eq!(err, CategoryError::AlreadyExists("abc".to_string()));
        assert_eq!(err.code(), ErrorCode::AlreadyExists);
    }

    #[test]
    fn already_exists_without_id_keeps_message() {
        let err: CategoryError =
            DomainError::new(ErrorCode::AlreadyExists, "category already exists").into();
        assert_eq!(
            err,
            CategoryError::AlreadyExists("category already exists".to_string())
        );
    }

    #[test]
    fn validation_domain_error_round_trips_violations() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "name".to_string(),
            vec!["name should not be empty".to_string()],
        );
        let domain: DomainError = EntityValidationError::new(errors.clone()).into();

        let err: CategoryError = domain.into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err, CategoryError::Validation(EntityValidationError::new(errors)));
    }

    #[test]
    fn data_integrity_is_preserved() {
        let err: CategoryError = DomainError::new(ErrorCode::DataIntegrity, "bad row").into();
        assert_eq!(err, CategoryError::DataIntegrity("bad row".to_string()));
    }

    #[test]
    fn validation_error_keeps_violation_map() {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), vec!["name should not be empty".to_string()]);
        let err: CategoryError = EntityValidationError::new(errors.clone()).into();

        match err {
            CategoryError::Validation(inner) => assert_eq!(inner.errors(), &errors),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_uuid_maps_to_invalid_identifier() {
        let err: CategoryError = InvalidUuidError::new("fake id").into();
        assert_eq!(err.code(), ErrorCode::InvalidIdentifier);
    }
}
