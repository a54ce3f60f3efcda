//! Output projection handed to presentation and transport layers.

use crate::category::domain::CategoryId;
use crate::task::domain::{Task, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Flat, serialisable view of a task with display metadata resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Status label.
    pub status_label: &'static str,
    /// Priority.
    pub priority: TaskPriority,
    /// Priority label.
    pub priority_label: &'static str,
    /// Priority badge colour.
    pub priority_color: &'static str,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Linked category, if any.
    pub category_id: Option<CategoryId>,
    /// Archive flag.
    pub archived: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        let status = task.status();
        let priority = task.priority();
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status,
            status_label: status.display_name(),
            priority,
            priority_label: priority.display_name(),
            priority_color: priority.color(),
            due_date: task.due_date(),
            completed_at: task.completed_at(),
            category_id: task.category_id(),
            archived: task.is_archived(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}
