//! Category Catalog - Category aggregate and a generic searchable repository.
//!
//! The crate is laid out in hexagonal layers:
//! - `domain` - `Category` aggregate plus shared building blocks (identifiers,
//!   validation, entity identity, search protocol, repository contracts)
//! - `ports` - The `CategoryRepository` contract the application depends on
//! - `adapters` - PostgreSQL and in-memory implementations of that contract
//! - `application` - Create, update, get, list and delete handlers
//! - `config` - Environment-driven configuration and tracing setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
