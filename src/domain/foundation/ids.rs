//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{InvalidUuidError, ValueObject};

/// Length of the canonical hyphenated form (`8-4-4-4-12`).
const CANONICAL_LEN: usize = 36;

/// UUID identifier value object.
///
/// Keeps the textual form it was built from, so a parsed identifier renders
/// back exactly as given (upper case digits included). Equality, ordering and
/// hashing use the 128-bit value, so the same UUID written in a different case
/// is the same identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid {
    text: String,
    value: uuid::Uuid,
}

impl Uuid {
    /// Creates a new random (v4) identifier.
    pub fn new() -> Self {
        Self::from_uuid(uuid::Uuid::new_v4())
    }

    /// Parses an identifier from its canonical textual form.
    ///
    /// # Errors
    ///
    /// - `InvalidUuidError` unless the value is a hyphenated UUID
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidUuidError> {
        let text = value.into();
        if text.len() != CANONICAL_LEN {
            return Err(InvalidUuidError::new(text));
        }
        match uuid::Uuid::try_parse(&text) {
            Ok(value) => Ok(Self { text, value }),
            Err(_) => Err(InvalidUuidError::new(text)),
        }
    }

    /// Builds an identifier from an optional value, generating one when absent.
    pub fn from_optional(value: Option<String>) -> Result<Self, InvalidUuidError> {
        match value {
            Some(value) => Self::parse(value),
            None => Ok(Self::new()),
        }
    }

    /// Creates an identifier from an existing UUID.
    pub fn from_uuid(value: uuid::Uuid) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }

    /// Returns the identifier as text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the identifier as a binary UUID (for storage).
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.value
    }
}

impl ValueObject for Uuid {}

impl PartialEq for Uuid {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Uuid {}

impl Hash for Uuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uuid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Uuid {
    type Err = InvalidUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = InvalidUuidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.text
    }
}
