//! Error types for task validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned when task input fails a domain rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is absent or blank.
    #[error("task title is required")]
    EmptyTitle,

    /// The title exceeds the configured character limit.
    #[error("task title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted characters.
        max: usize,
        /// Characters supplied.
        actual: usize,
    },

    /// The description exceeds the configured character limit.
    #[error("task description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum permitted characters.
        max: usize,
        /// Characters supplied.
        actual: usize,
    },

    /// The due date lies before the validation instant.
    #[error("task due date {due_date} cannot be in the past (now: {now})")]
    DueDateInPast {
        /// Requested due date.
        due_date: DateTime<Utc>,
        /// Instant the check was made.
        now: DateTime<Utc>,
    },
}

/// Error returned while parsing task statuses from strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
