//! Application services for task tracking.

mod filter;
mod projection;
mod tasks;

pub use filter::{TaskFilter, TaskQuery};
pub use projection::TaskView;
pub use tasks::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
