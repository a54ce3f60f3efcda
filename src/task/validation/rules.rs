//! Individual validation rules for task input.
//!
//! Each rule checks one aspect of the input and returns `Ok(())` or a
//! specific [`TaskValidationError`].

use super::TaskValidationConfig;
use crate::task::domain::{TaskValidationError, TaskUpdate};
use chrono::{DateTime, Utc};

/// Validates that a title is present and not blank.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyTitle`] when the title is absent or
/// contains only whitespace.
pub fn validate_title_present(title: Option<&str>) -> Result<&str, TaskValidationError> {
    title
        .filter(|value| !value.trim().is_empty())
        .ok_or(TaskValidationError::EmptyTitle)
}

/// Validates the title length.
///
/// # Errors
///
/// Returns [`TaskValidationError::TitleTooLong`] when the title exceeds the
/// configured limit.
pub fn validate_title_length(
    title: &str,
    config: &TaskValidationConfig,
) -> Result<(), TaskValidationError> {
    let actual = title.chars().count();
    if actual > config.max_title_chars {
        return Err(TaskValidationError::TitleTooLong {
            max: config.max_title_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates the description length.
///
/// # Errors
///
/// Returns [`TaskValidationError::DescriptionTooLong`] when the description
/// exceeds the configured limit.
pub fn validate_description_length(
    description: &str,
    config: &TaskValidationConfig,
) -> Result<(), TaskValidationError> {
    let actual = description.chars().count();
    if actual > config.max_description_chars {
        return Err(TaskValidationError::DescriptionTooLong {
            max: config.max_description_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates that a due date is not strictly before `now`.
///
/// # Errors
///
/// Returns [`TaskValidationError::DueDateInPast`] when `due_date < now`.
pub fn validate_due_date_not_past(
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), TaskValidationError> {
    if due_date < now {
        return Err(TaskValidationError::DueDateInPast { due_date, now });
    }
    Ok(())
}

/// Validates the fields of a new task, stopping at the first failure.
///
/// Checks run in order: title presence, title length, description length,
/// due date.
///
/// # Errors
///
/// Returns the first [`TaskValidationError`] encountered.
pub fn validate_new_task(
    title: Option<&str>,
    description: Option<&str>,
    due_date: Option<DateTime<Utc>>,
    config: &TaskValidationConfig,
    now: DateTime<Utc>,
) -> Result<(), TaskValidationError> {
    let present_title = validate_title_present(title)?;
    validate_title_length(present_title, config)?;
    if let Some(text) = description {
        validate_description_length(text, config)?;
    }
    if let Some(due) = due_date {
        validate_due_date_not_past(due, now)?;
    }
    Ok(())
}

/// Validates the length limits of the fields an update would write.
///
/// # Errors
///
/// Returns [`TaskValidationError::TitleTooLong`] or
/// [`TaskValidationError::DescriptionTooLong`].
pub fn validate_update_lengths(
    update: &TaskUpdate,
    config: &TaskValidationConfig,
) -> Result<(), TaskValidationError> {
    if let Some(title) = update.effective_title() {
        validate_title_length(title, config)?;
    }
    if let Some(description) = update.description.as_set() {
        validate_description_length(description, config)?;
    }
    Ok(())
}
