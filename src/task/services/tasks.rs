//! Service layer for task creation, update, completion, archival and
//! listing.

use crate::category::domain::CategoryId;
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus, TaskUpdate, TaskValidationError},
    ports::{TaskRepository, TaskRepositoryError},
    validation::{TaskValidationConfig, rules},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use super::{TaskFilter, TaskQuery};

/// Request payload for creating a task.
///
/// Every field is optional at the type level so that a missing title is
/// reported as a validation failure rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    due_date: Option<DateTime<Utc>>,
    category_id: Option<CategoryId>,
}

impl CreateTaskRequest {
    /// Creates a request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates a request without a title.
    #[must_use]
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Links the task to a category.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input failed a domain rule. Nothing was written.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task kept changing underneath every write attempt.
    #[error("task was modified concurrently: {0}")]
    Conflict(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Read-modify-write attempts made before a conflict is reported.
const MAX_WRITE_ATTEMPTS: usize = 3;

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Holds no mutable state of its own. Every mutating operation is a
/// read-modify-write against the injected repository, re-read and retried
/// when the store reports a concurrent write.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    validation: TaskValidationConfig,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service with default validation limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            validation: TaskValidationConfig::default(),
        }
    }

    /// Replaces the validation limits.
    #[must_use]
    pub const fn with_validation_config(mut self, validation: TaskValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Returns the validation limits in effect.
    #[must_use]
    pub const fn validation_config(&self) -> &TaskValidationConfig {
        &self.validation
    }

    /// Creates a task, applying `TODO` and `MEDIUM` defaults for an absent
    /// status and priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is absent or
    /// blank, a length limit is exceeded or the due date is in the past,
    /// and [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        rules::validate_new_task(
            request.title.as_deref(),
            request.description.as_deref(),
            request.due_date,
            &self.validation,
            self.clock.utc(),
        )?;
        let title = request.title.ok_or(TaskValidationError::EmptyTitle)?;

        let new_task = NewTask {
            title,
            description: request.description,
            status: request.status.unwrap_or_default(),
            priority: request.priority.unwrap_or_default(),
            due_date: request.due_date,
            category_id: request.category_id,
        };
        Ok(self.repository.insert(new_task).await?)
    }

    /// Applies a partial update to an existing task.
    ///
    /// A blank incoming title is ignored. Moving to `DONE` records the
    /// completion time only if none has been recorded before.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Validation`] when a new title or description
    /// exceeds its length limit, [`TaskServiceError::Conflict`] when
    /// concurrent writes win every attempt, and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskServiceResult<Task> {
        self.modify(id, move |task| {
            rules::validate_update_lengths(&update, &self.validation)?;
            task.apply_update(update.clone(), &*self.clock);
            Ok(())
        })
        .await
    }

    /// Archives a task. Status, priority and every other field are kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Conflict`] when concurrent writes win every
    /// attempt, and [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.modify(id, |task| {
            task.archive();
            Ok(())
        })
        .await?;
        Ok(())
    }

    /// Marks a task done and stamps the completion time, replacing any
    /// earlier completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Conflict`] when concurrent writes win every
    /// attempt, and [`TaskServiceError::Repository`] when persistence fails.
    pub async fn mark_complete(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.modify(id, |task| {
            task.mark_complete(&*self.clock);
            Ok(())
        })
        .await
    }

    /// Lists tasks according to `filter`.
    ///
    /// Keyword search results include archived tasks; status, priority and
    /// unfiltered listings do not.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        let tasks = match filter.query() {
            TaskQuery::Search(keyword) => self.repository.search_by_keyword(keyword).await?,
            TaskQuery::Status(status) => self.repository.find_by_status(status, true).await?,
            TaskQuery::Priority(priority) => {
                self.repository.find_by_priority(priority, true).await?
            }
            TaskQuery::All => self.repository.find_all_non_archived().await?,
        };
        Ok(tasks)
    }

    /// Lists unfinished, non-archived tasks whose due date has passed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_overdue(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_overdue(self.clock.utc()).await?)
    }

    /// Retrieves a task by identifier, including archived tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// and [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.load(id).await
    }

    async fn load(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Loads the task, applies `change` and writes it back, starting over
    /// from a fresh read when the store reports a conflicting write.
    async fn modify<F>(&self, id: TaskId, mut change: F) -> TaskServiceResult<Task>
    where
        F: FnMut(&mut Task) -> TaskServiceResult<()>,
    {
        for _ in 0..MAX_WRITE_ATTEMPTS {
            let mut task = self.load(id).await?;
            change(&mut task)?;
            match self.repository.update(&task).await {
                Ok(stored) => return Ok(stored),
                Err(TaskRepositoryError::Conflict(_)) => {}
                Err(TaskRepositoryError::NotFound(missing)) => {
                    return Err(TaskServiceError::NotFound(missing));
                }
                Err(err @ TaskRepositoryError::Persistence(_)) => {
                    return Err(TaskServiceError::Repository(err));
                }
            }
        }
        Err(TaskServiceError::Conflict(id))
    }
}
