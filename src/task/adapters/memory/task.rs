//! In-memory repository for task tracking tests and prototyping.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Timestamps are taken from the injected clock. Listings preserve
/// insertion order, which matches creation order.
#[derive(Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskState {
    fn collect<F>(&self, predicate: F) -> Vec<Task>
    where
        F: Fn(&Task) -> bool,
    {
        self.insertion_order
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .filter(|task| predicate(task))
            .cloned()
            .collect()
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    /// Returns the number of stored tasks, archived ones included.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the lock is poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    /// Returns `true` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the lock is poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.read()?.tasks.is_empty())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryTaskRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryTaskRepository")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let timestamp = self.clock.utc();
        let stored = Task::from_new(TaskId::new(), task, timestamp, timestamp);
        let mut state = self.write()?;
        state.insertion_order.push(stored.id());
        state.tasks.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let timestamp = self.clock.utc();
        let mut state = self.write()?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        if slot.updated_at() != task.updated_at() {
            return Err(TaskRepositoryError::Conflict(task.id()));
        }
        let mut updated = task.clone();
        if slot.is_archived() {
            updated.archive();
        }
        updated.set_updated_at(timestamp);
        slot.clone_from(&updated);
        Ok(updated)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Ok(self.read()?.tasks.get(&id).cloned())
    }

    async fn find_by_status(
        &self,
        status: TaskStatus,
        exclude_archived: bool,
    ) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.collect(|task| {
            task.status() == status && !(exclude_archived && task.is_archived())
        }))
    }

    async fn find_by_priority(
        &self,
        priority: TaskPriority,
        exclude_archived: bool,
    ) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.collect(|task| {
            task.priority() == priority && !(exclude_archived && task.is_archived())
        }))
    }

    async fn find_all_non_archived(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.collect(|task| !task.is_archived()))
    }

    async fn search_by_keyword(&self, keyword: &str) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.collect(|task| task.matches_keyword(keyword)))
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self
            .read()?
            .collect(|task| !task.is_archived() && task.is_overdue(now)))
    }
}
