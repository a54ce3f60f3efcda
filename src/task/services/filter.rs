//! List filtering with search > status > priority precedence.

use crate::task::domain::{TaskPriority, TaskStatus};
use serde::Deserialize;

/// Caller-supplied listing criteria.
///
/// At most one criterion takes effect. A search keyword wins over a status,
/// which wins over a priority; with none supplied every non-archived task
/// is listed. A blank keyword counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskFilter {
    /// Keyword matched against title and description.
    pub search: Option<String>,
    /// Status to match.
    pub status: Option<TaskStatus>,
    /// Priority to match.
    pub priority: Option<TaskPriority>,
}

/// The single query a [`TaskFilter`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskQuery<'a> {
    /// Keyword search, archived tasks included.
    Search(&'a str),
    /// Non-archived tasks with this status.
    Status(TaskStatus),
    /// Non-archived tasks with this priority.
    Priority(TaskPriority),
    /// All non-archived tasks.
    All,
}

impl TaskFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search keyword.
    #[must_use]
    pub fn with_search(mut self, keyword: impl Into<String>) -> Self {
        self.search = Some(keyword.into());
        self
    }

    /// Sets the status criterion.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority criterion.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Resolves the criterion that takes effect.
    #[must_use]
    pub fn query(&self) -> TaskQuery<'_> {
        if let Some(keyword) = self
            .search
            .as_deref()
            .filter(|keyword| !keyword.trim().is_empty())
        {
            return TaskQuery::Search(keyword);
        }
        if let Some(status) = self.status {
            return TaskQuery::Status(status);
        }
        self.priority.map_or(TaskQuery::All, TaskQuery::Priority)
    }
}
