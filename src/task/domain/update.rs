//! Partial-update input for existing tasks.

use crate::category::domain::CategoryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::{TaskPriority, TaskStatus};

/// Change requested for an optional task field.
///
/// Distinguishes "leave the stored value alone" from "clear the stored
/// value", which a bare `Option` cannot express. When deserialized as a
/// struct field marked `#[serde(default)]`, a missing key yields
/// [`FieldUpdate::Unchanged`], an explicit `null` yields
/// [`FieldUpdate::Clear`] and any other value yields [`FieldUpdate::Set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Keep the stored value.
    Unchanged,
    /// Remove the stored value.
    Clear,
    /// Replace the stored value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Applies the change to `field`.
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::Clear => *field = None,
            Self::Set(value) => *field = Some(value),
        }
    }

    /// Returns the new value when one is being set.
    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unchanged | Self::Clear => None,
        }
    }

    /// Returns `true` when no change is requested.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Fields to change on an existing task.
///
/// Title, status and priority are mandatory on a task, so they can only be
/// replaced, never cleared. A blank incoming title is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskUpdate {
    /// Replacement title.
    pub title: Option<String>,
    /// Description change.
    pub description: FieldUpdate<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Due date change.
    pub due_date: FieldUpdate<DateTime<Utc>>,
    /// Category link change.
    pub category_id: FieldUpdate<CategoryId>,
}

impl TaskUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldUpdate::Set(description.into());
        self
    }

    /// Requests that the description be removed.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = FieldUpdate::Clear;
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = FieldUpdate::Set(due_date);
        self
    }

    /// Requests that the due date be removed.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = FieldUpdate::Clear;
        self
    }

    /// Links the task to a category.
    #[must_use]
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = FieldUpdate::Set(category_id);
        self
    }

    /// Removes the category link.
    #[must_use]
    pub fn clear_category(mut self) -> Self {
        self.category_id = FieldUpdate::Clear;
        self
    }

    /// Returns the incoming title when it is present and non-blank.
    #[must_use]
    pub fn effective_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
    }
}
