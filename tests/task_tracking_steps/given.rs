//! Given steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;

#[given(r#"an existing task titled "{title}""#)]
fn existing_task(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(CreateTaskRequest::new(title)))
        .wrap_err("create task for scenario")?;
    world
        .tasks_by_title
        .insert(created.title().to_owned(), created);
    Ok(())
}

#[given(r#"the task "{title}" has been deleted"#)]
fn task_has_been_deleted(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task(&title)?.id();
    run_async(world.service.delete(id)).wrap_err("archive task for scenario")?;
    Ok(())
}
