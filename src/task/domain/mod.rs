//! Domain model for personal task tracking.
//!
//! The task domain owns the rules for defaults, completion timestamps,
//! partial updates and archival while keeping all persistence concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod priority;
mod status;
mod task;
mod update;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskValidationError};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
pub use update::{FieldUpdate, TaskUpdate};
