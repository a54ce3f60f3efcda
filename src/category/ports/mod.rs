//! Port contracts for categories.

pub mod repository;

pub use repository::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult};
