//! Task aggregate root.

use super::{TaskId, TaskPriority, TaskStatus, TaskUpdate};
use crate::category::domain::CategoryId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated task data that has not yet been persisted.
///
/// The store assigns the identifier and the creation and update
/// timestamps when it inserts the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Non-blank title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: TaskPriority,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional informational category link.
    pub category_id: Option<CategoryId>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    category_id: Option<CategoryId>,
    archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted category link, if any.
    pub category_id: Option<CategoryId>,
    /// Persisted archive flag.
    pub archived: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materializes a freshly inserted task.
    ///
    /// Intended for store implementations: the new record starts
    /// unarchived and without a completion timestamp.
    #[must_use]
    pub fn from_new(
        id: TaskId,
        new_task: NewTask,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            priority: new_task.priority,
            due_date: new_task.due_date,
            completed_at: None,
            category_id: new_task.category_id,
            archived: false,
            created_at,
            updated_at,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            completed_at: data.completed_at,
            category_id: data.category_id,
            archived: data.archived,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns when the task first reached, or was last marked, done.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the linked category, if any.
    #[must_use]
    pub const fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Returns `true` once the task has been archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Refreshes the update timestamp. Intended for store implementations.
    pub const fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    /// Applies a partial update.
    ///
    /// Absent fields are left untouched and a blank title is ignored. When
    /// the status becomes [`TaskStatus::Done`] and no completion timestamp
    /// exists yet, the current time is recorded; an existing completion
    /// timestamp is preserved.
    pub fn apply_update(&mut self, update: TaskUpdate, clock: &impl Clock) {
        if let Some(title) = update.effective_title() {
            title.clone_into(&mut self.title);
        }
        update.description.apply_to(&mut self.description);
        if let Some(status) = update.status {
            self.status = status;
            if status == TaskStatus::Done && self.completed_at.is_none() {
                self.completed_at = Some(clock.utc());
            }
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        update.due_date.apply_to(&mut self.due_date);
        update.category_id.apply_to(&mut self.category_id);
    }

    /// Marks the task done, stamping the completion time unconditionally.
    ///
    /// Unlike [`Task::apply_update`], repeated calls move the completion
    /// timestamp forward.
    pub fn mark_complete(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Done;
        self.completed_at = Some(clock.utc());
    }

    /// Archives the task. Archival is one-way.
    pub const fn archive(&mut self) {
        self.archived = true;
    }

    /// Returns `true` when `keyword` occurs in the title or description,
    /// ignoring case.
    #[must_use]
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }

    /// Returns `true` when the task is unfinished and its due date lies
    /// strictly before `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Done && self.due_date.is_some_and(|due| due < now)
    }
}

