//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Board, board, ids};
use chrono::Duration;
use rstest::rstest;
use taskboard::category::domain::CategoryId;
use taskboard::task::{
    domain::{FieldUpdate, TaskId, TaskPriority, TaskStatus, TaskUpdate},
    services::{CreateTaskRequest, TaskFilter, TaskServiceError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_fetch_returns_stored_task(board: Board) -> eyre::Result<()> {
    let created = board
        .service
        .create(CreateTaskRequest::new("Book dentist").with_priority(TaskPriority::High))
        .await?;
    let fetched = board.service.get_by_id(created.id()).await?;

    eyre::ensure!(fetched == created, "fetched task differs from created task");
    eyre::ensure!(fetched.status() == TaskStatus::Todo, "status defaults to TODO");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_from_todo_to_archived(board: Board) -> eyre::Result<()> {
    let created = board
        .service
        .create(CreateTaskRequest::new("Write blog post"))
        .await?;

    let started = board
        .service
        .update(
            created.id(),
            TaskUpdate::new()
                .with_status(TaskStatus::InProgress)
                .with_description("Draft outline"),
        )
        .await?;
    eyre::ensure!(started.completed_at().is_none(), "not completed yet");

    let done = board.service.mark_complete(created.id()).await?;
    eyre::ensure!(done.status() == TaskStatus::Done, "marked done");
    eyre::ensure!(done.completed_at().is_some(), "completion stamped");

    board.service.delete(created.id()).await?;
    let archived = board.service.get_by_id(created.id()).await?;
    eyre::ensure!(archived.is_archived(), "archived after delete");
    eyre::ensure!(archived.completed_at() == done.completed_at(), "completion kept");
    eyre::ensure!(archived.description() == Some("Draft outline"), "description kept");

    let listed = board.service.list(&TaskFilter::new()).await?;
    eyre::ensure!(!ids(&listed).contains(&created.id()), "hidden from listing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_explicit_field_changes_sets_and_clears(board: Board) -> eyre::Result<()> {
    let due = board.clock.peek() + Duration::days(1);
    let category = CategoryId::new();
    let created = board
        .service
        .create(
            CreateTaskRequest::new("Renew insurance")
                .with_description("Compare quotes")
                .with_due_date(due)
                .with_category(category),
        )
        .await?;

    let update = TaskUpdate {
        description: FieldUpdate::Clear,
        category_id: FieldUpdate::Clear,
        ..TaskUpdate::default()
    };
    let updated = board.service.update(created.id(), update).await?;

    eyre::ensure!(updated.description().is_none(), "description cleared");
    eyre::ensure!(updated.category_id().is_none(), "category cleared");
    eyre::ensure!(updated.due_date() == Some(due), "due date untouched");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_is_not_found(board: Board) {
    let result = board
        .service
        .update(TaskId::new(), TaskUpdate::new().with_title("Nope"))
        .await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}
