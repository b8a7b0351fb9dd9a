//! Declarative validation gate.
//!
//! Entities describe their constraints as a static table of [`FieldRules`];
//! a single interpreter ([`RuleValidator`]) evaluates the table against the
//! values an entity exposes through [`Validatable`].
//!
//! # Example
//!
//! ```
//! use category_catalog::domain::foundation::{
//!     FieldKind, FieldRules, FieldValue, Rule, RuleValidator, Validatable,
//! };
//!
//! struct Tag {
//!     label: String,
//! }
//!
//! impl Validatable for Tag {
//!     fn field_value(&self, field: &str) -> FieldValue<'_> {
//!         match field {
//!             "label" => FieldValue::Text(&self.label),
//!             _ => FieldValue::Null,
//!         }
//!     }
//! }
//!
//! const TAG_RULES: &[FieldRules] = &[FieldRules::new(
//!     "label",
//!     &[Rule::Required, Rule::Kind(FieldKind::Text), Rule::MaxLength(10)],
//! )];
//!
//! let validator = RuleValidator::new(TAG_RULES);
//! assert!(validator.validate(&Tag { label: "rust".into() }).is_ok());
//! assert!(validator.validate(&Tag { label: "".into() }).is_err());
//! ```

use super::{EntityValidationError, FieldErrors, Timestamp};

/// Value of a single attribute as seen by the rule interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Bool(bool),
    Time(&'a Timestamp),
    /// Absent or explicitly null.
    Null,
}

impl FieldValue<'_> {
    fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldValue::Text(_) => Some(FieldKind::Text),
            FieldValue::Bool(_) => Some(FieldKind::Bool),
            FieldValue::Time(_) => Some(FieldKind::Time),
            FieldValue::Null => None,
        }
    }
}

/// Expected type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bool,
    Time,
}

/// A single declarative constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present; text must contain a non-whitespace character.
    Required,
    /// Text must not exceed this many characters.
    MaxLength(usize),
    /// Value must be of this kind.
    Kind(FieldKind),
}

impl Rule {
    /// Returns a violation message when the rule fails.
    ///
    /// Null values only fail `Required`; optional fields skip the other rules.
    fn check(&self, field: &str, value: FieldValue<'_>) -> Option<String> {
        match (self, value) {
            (Rule::Required, FieldValue::Null) => Some(format!("{} should not be empty", field)),
            (Rule::Required, FieldValue::Text(text)) if text.trim().is_empty() => {
                Some(format!("{} should not be empty", field))
            }
            (Rule::Required, _) => None,
            (_, FieldValue::Null) => None,
            (Rule::MaxLength(max), FieldValue::Text(text)) if text.chars().count() > *max => Some(
                format!("{} must be shorter than or equal to {} characters", field, max),
            ),
            (Rule::MaxLength(_), _) => None,
            (Rule::Kind(expected), actual) if actual.kind() != Some(*expected) => {
                Some(kind_message(field, *expected))
            }
            (Rule::Kind(_), _) => None,
        }
    }
}

fn kind_message(field: &str, kind: FieldKind) -> String {
    match kind {
        FieldKind::Text => format!("{} must be a string", field),
        FieldKind::Bool => format!("{} must be a boolean value", field),
        FieldKind::Time => format!("{} must be a Date instance", field),
    }
}

/// Constraints attached to one attribute.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub const fn new(field: &'static str, rules: &'static [Rule]) -> Self {
        Self { field, rules }
    }
}

/// Exposes attribute values to the rule interpreter by field name.
pub trait Validatable {
    /// Returns the current value of `field`, or `Null` for unknown fields.
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

/// Generic interpreter for a static rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleValidator {
    table: &'static [FieldRules],
}

impl RuleValidator {
    pub const fn new(table: &'static [FieldRules]) -> Self {
        Self { table }
    }

    /// Runs every rule and collects all violations per field.
    pub fn violations<T: Validatable + ?Sized>(&self, target: &T) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for entry in self.table {
            let value = target.field_value(entry.field);
            let messages: Vec<String> = entry
                .rules
                .iter()
                .filter_map(|rule| rule.check(entry.field, value))
                .collect();
            if !messages.is_empty() {
                errors.entry(entry.field.to_string()).or_default().extend(messages);
            }
        }
        errors
    }

    /// Validates a target, failing with the full violation map.
    ///
    /// # Errors
    ///
    /// - `EntityValidationError` if any rule fails
    pub fn validate<T: Validatable + ?Sized>(&self, target: &T) -> Result<(), EntityValidationError> {
        let errors = self.violations(target);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(EntityValidationError::new(errors))
        }
    }
}
