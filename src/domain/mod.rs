//! Domain layer - entities, value objects, and repository contracts.

pub mod category;
pub mod foundation;
