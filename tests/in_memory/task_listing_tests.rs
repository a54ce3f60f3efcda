//! In-memory integration tests for task listing, search and overdue queries.

use super::helpers::{Board, board, ids};
use chrono::Duration;
use rstest::rstest;
use taskboard::task::{
    domain::{TaskPriority, TaskStatus},
    services::{CreateTaskRequest, TaskFilter},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_is_case_insensitive_across_fields(board: Board) -> eyre::Result<()> {
    let title_hit = board
        .service
        .create(CreateTaskRequest::new("GROCERY run"))
        .await?;
    let description_hit = board
        .service
        .create(CreateTaskRequest::new("Errands").with_description("grocery list"))
        .await?;
    board.service.create(CreateTaskRequest::new("Gym")).await?;

    let found = board
        .service
        .list(&TaskFilter::new().with_search("Grocery"))
        .await?;

    eyre::ensure!(
        ids(&found) == vec![title_hit.id(), description_hit.id()],
        "expected both grocery tasks, got {found:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_search_falls_back_to_priority(board: Board) -> eyre::Result<()> {
    let low = board
        .service
        .create(CreateTaskRequest::new("Tidy desk").with_priority(TaskPriority::Low))
        .await?;
    board.service.create(CreateTaskRequest::new("Default")).await?;

    let found = board
        .service
        .list(
            &TaskFilter::new()
                .with_search("   ")
                .with_priority(TaskPriority::Low),
        )
        .await?;

    eyre::ensure!(ids(&found) == vec![low.id()], "priority filter applies");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_beats_priority_filter(board: Board) -> eyre::Result<()> {
    let in_progress = board
        .service
        .create(
            CreateTaskRequest::new("Refactor")
                .with_status(TaskStatus::InProgress)
                .with_priority(TaskPriority::Low),
        )
        .await?;
    board
        .service
        .create(CreateTaskRequest::new("Urgent call").with_priority(TaskPriority::Urgent))
        .await?;

    let found = board
        .service
        .list(
            &TaskFilter::new()
                .with_status(TaskStatus::InProgress)
                .with_priority(TaskPriority::Urgent),
        )
        .await?;

    eyre::ensure!(ids(&found) == vec![in_progress.id()], "status filter wins");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_excludes_archived_tasks(board: Board) -> eyre::Result<()> {
    let due = board.clock.peek() + Duration::hours(1);
    let archived = board
        .service
        .create(CreateTaskRequest::new("Forgotten").with_due_date(due))
        .await?;
    let live = board
        .service
        .create(CreateTaskRequest::new("Pending").with_due_date(due))
        .await?;
    board.service.delete(archived.id()).await?;
    board.clock.advance(Duration::hours(2));

    let overdue = board.service.list_overdue().await?;

    eyre::ensure!(ids(&overdue) == vec![live.id()], "archived task excluded");
    Ok(())
}
