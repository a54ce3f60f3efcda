//! Shared world state for task tracking BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task tracking behaviour tests.
pub struct TaskTrackingWorld {
    pub service: TestTaskService,
    pub tasks_by_title: HashMap<String, Task>,
    pub last_listing: Option<Vec<Task>>,
    pub last_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskTrackingWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            tasks_by_title: HashMap::new(),
            last_listing: None,
            last_result: None,
        }
    }

    /// Returns the task remembered under `title`.
    pub fn task(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.tasks_by_title
            .get(title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }

    /// Records the outcome of an operation returning a task.
    pub fn record(&mut self, result: Result<Task, TaskServiceError>) {
        if let Ok(ref task) = result {
            self.tasks_by_title.insert(task.title().to_owned(), task.clone());
        }
        self.last_result = Some(result);
    }
}

impl Default for TaskTrackingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTrackingWorld {
    TaskTrackingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
