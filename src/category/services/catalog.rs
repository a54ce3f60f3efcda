//! Service layer for category creation and lookup.

use crate::category::{
    domain::{
        Category, CategoryColor, CategoryDomainError, CategoryIcon, CategoryId, CategoryName,
    },
    ports::{CategoryRepository, CategoryRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    name: String,
    color: Option<String>,
    icon: Option<String>,
}

impl CreateCategoryRequest {
    /// Creates a request with the given name and the default colour.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            icon: None,
        }
    }

    /// Sets the display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the icon label.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Service-level errors for category operations.
#[derive(Debug, Error)]
pub enum CategoryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CategoryDomainError),

    /// Another category already uses the name.
    #[error("category name already in use: {0}")]
    DuplicateName(CategoryName),

    /// No category exists with the identifier.
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(CategoryRepositoryError),
}

impl From<CategoryRepositoryError> for CategoryServiceError {
    fn from(err: CategoryRepositoryError) -> Self {
        match err {
            CategoryRepositoryError::DuplicateName(name) => Self::DuplicateName(name),
            other @ CategoryRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for category service operations.
pub type CategoryServiceResult<T> = Result<T, CategoryServiceError>;

/// Category orchestration service.
#[derive(Clone)]
pub struct CategoryService<R, C>
where
    R: CategoryRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CategoryService<R, C>
where
    R: CategoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new category service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a category with a unique name.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Domain`] for invalid fields,
    /// [`CategoryServiceError::DuplicateName`] when the name is taken and
    /// [`CategoryServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        request: CreateCategoryRequest,
    ) -> CategoryServiceResult<Category> {
        let name = CategoryName::new(request.name)?;
        let color = request
            .color
            .map(CategoryColor::new)
            .transpose()?
            .unwrap_or_default();
        let icon = request.icon.map(CategoryIcon::new).transpose()?;

        if self.repository.exists_by_name(&name).await? {
            return Err(CategoryServiceError::DuplicateName(name));
        }

        let category = Category::new(name, color, icon, &*self.clock);
        self.repository.store(&category).await?;
        Ok(category)
    }

    /// Retrieves a category by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::NotFound`] when missing and
    /// [`CategoryServiceError::Repository`] when the lookup fails.
    pub async fn get_by_id(&self, id: CategoryId) -> CategoryServiceResult<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryServiceError::NotFound(id))
    }

    /// Finds a category by name. Returns `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Domain`] for a blank name and
    /// [`CategoryServiceError::Repository`] when the lookup fails.
    pub async fn find_by_name(&self, name: &str) -> CategoryServiceResult<Option<Category>> {
        let lookup = CategoryName::new(name)?;
        Ok(self.repository.find_by_name(&lookup).await?)
    }

    /// Returns `true` when a category with the name exists.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Domain`] for a blank name and
    /// [`CategoryServiceError::Repository`] when the lookup fails.
    pub async fn exists_by_name(&self, name: &str) -> CategoryServiceResult<bool> {
        let lookup = CategoryName::new(name)?;
        Ok(self.repository.exists_by_name(&lookup).await?)
    }

    /// Lists every category ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> CategoryServiceResult<Vec<Category>> {
        Ok(self.repository.list_ordered_by_name().await?)
    }
}
