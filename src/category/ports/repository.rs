//! Repository port for category persistence and lookup.

use crate::category::domain::{Category, CategoryId, CategoryName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for category repository operations.
pub type CategoryRepositoryResult<T> = Result<T, CategoryRepositoryError>;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::DuplicateName`] when another
    /// category already uses the name.
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Finds a category by identifier.
    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>>;

    /// Finds a category by exact name.
    async fn find_by_name(&self, name: &CategoryName)
    -> CategoryRepositoryResult<Option<Category>>;

    /// Returns `true` when a category with the name exists.
    async fn exists_by_name(&self, name: &CategoryName) -> CategoryRepositoryResult<bool>;

    /// Returns all categories ordered by name ascending.
    async fn list_ordered_by_name(&self) -> CategoryRepositoryResult<Vec<Category>>;
}

/// Errors returned by category repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CategoryRepositoryError {
    /// The name is already taken.
    #[error("duplicate category name: {0}")]
    DuplicateName(CategoryName),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CategoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
