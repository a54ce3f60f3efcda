//! Repository port for task persistence, lookup, filtering and search.

use crate::task::domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Listing methods return tasks ordered by creation time, oldest first.
/// Writes are optimistic: [`TaskRepository::update`] only succeeds when the
/// stored update timestamp still equals the one on the submitted task, and
/// an archived record never becomes unarchived.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the write fails.
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Writes back an existing task, refreshing its update timestamp.
    ///
    /// The archive flag is merged with the stored one, so a stale snapshot
    /// cannot unarchive a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// and [`TaskRepositoryError::Conflict`] when it was written since `task`
    /// was read.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier, archived or not.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns tasks with the given status.
    async fn find_by_status(
        &self,
        status: TaskStatus,
        exclude_archived: bool,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks with the given priority.
    async fn find_by_priority(
        &self,
        priority: TaskPriority,
        exclude_archived: bool,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task that has not been archived.
    async fn find_all_non_archived(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks whose title or description contains `keyword`,
    /// ignoring case. Archived tasks are included.
    async fn search_by_keyword(&self, keyword: &str) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns non-archived tasks that are not done and whose due date is
    /// strictly before `now`.
    async fn find_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task changed after the submitted copy was read.
    #[error("task was modified concurrently: {0}")]
    Conflict(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
