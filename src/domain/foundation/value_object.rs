//! Value object and entity base traits.
//!
//! Value objects compare by content; entities compare by identity only.

use std::fmt::Debug;
use std::hash::Hash;

/// Immutable value compared by its attributes.
///
/// Equality comes from the derived `PartialEq`, so two value objects of the
/// same type with identical attributes are equal.
pub trait ValueObject: Clone + Eq + Debug + Send + Sync {
    /// Structural equality with another value of the same type.
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// Domain object with a stable identity independent of its attributes.
pub trait Entity: Send + Sync {
    /// Identity value object.
    type Id: ValueObject + Hash;

    /// Returns the identity of this entity.
    fn entity_id(&self) -> &Self::Id;

    /// Identity equality: same type and same `entity_id`.
    fn equals(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }
}

/// Implements `PartialEq`/`Eq` for an entity in terms of its identity.
#[macro_export]
macro_rules! impl_identity_eq {
    ($entity:ty) => {
        impl PartialEq for $entity {
            fn eq(&self, other: &Self) -> bool {
                $crate::domain::foundation::Entity::equals(self, other)
            }
        }

        impl Eq for $entity {}
    };
}
