//! In-memory category repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::category::{
    domain::{Category, CategoryId, CategoryName},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};

/// Thread-safe in-memory category repository keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<BTreeMap<CategoryName, Category>>>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> CategoryRepositoryError {
    CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.contains_key(category.name()) {
            return Err(CategoryRepositoryError::DuplicateName(
                category.name().clone(),
            ));
        }
        state.insert(category.name().clone(), category.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.values().find(|category| category.id() == id).cloned())
    }

    async fn find_by_name(
        &self,
        name: &CategoryName,
    ) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(name).cloned())
    }

    async fn exists_by_name(&self, name: &CategoryName) -> CategoryRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.contains_key(name))
    }

    async fn list_ordered_by_name(&self) -> CategoryRepositoryResult<Vec<Category>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.values().cloned().collect())
    }
}
