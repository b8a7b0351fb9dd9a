//! In-memory adapters for tests and local development.

mod category_repository;

pub use category_repository::InMemoryCategoryRepository;
