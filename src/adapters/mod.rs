//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL persistence (pool, migrations, repositories)
//! - `memory` - In-memory repositories with the same semantics
//! - `category_row` - Stored form of a Category and its mapper

pub mod category_row;
pub mod memory;
pub mod postgres;

pub use category_row::{CategoryModelMapper, CategoryRow};
pub use memory::InMemoryCategoryRepository;
pub use postgres::{connect, run_migrations, PostgresCategoryRepository};
