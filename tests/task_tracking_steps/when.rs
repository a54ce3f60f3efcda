//! When steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::TaskId,
    services::{CreateTaskRequest, TaskFilter},
};

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskTrackingWorld, title: String) {
    let result = run_async(world.service.create(CreateTaskRequest::new(title)));
    world.record(result);
}

#[when(r#"the task "{title}" is deleted"#)]
fn delete_task(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task(&title)?.id();
    run_async(world.service.delete(id)).wrap_err("delete task")?;
    Ok(())
}

#[when(r#"the task "{title}" is marked complete"#)]
fn complete_task(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task(&title)?.id();
    let result = run_async(world.service.mark_complete(id));
    world.record(result);
    Ok(())
}

#[when("an unknown task is marked complete")]
fn complete_unknown_task(world: &mut TaskTrackingWorld) {
    let result = run_async(world.service.mark_complete(TaskId::new()));
    world.record(result);
}

#[when(r#"tasks are searched for "{keyword}""#)]
fn search_tasks(world: &mut TaskTrackingWorld, keyword: String) -> Result<(), eyre::Report> {
    let filter = TaskFilter::new().with_search(keyword);
    let found = run_async(world.service.list(&filter)).wrap_err("search tasks")?;
    world.last_listing = Some(found);
    Ok(())
}

#[when("all tasks are listed")]
fn list_all_tasks(world: &mut TaskTrackingWorld) -> Result<(), eyre::Report> {
    let found = run_async(world.service.list(&TaskFilter::new())).wrap_err("list tasks")?;
    world.last_listing = Some(found);
    Ok(())
}
