//! Task repository tests against `PostgreSQL`.

use super::helpers::{BoxError, test_database};
use chrono::{Duration, SubsecRound, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};

fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_owned(),
        description: None,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        due_date: None,
        category_id: None,
    }
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_fills_timestamps_from_database() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());

    let inserted = repo.insert(new_task("Water plants")).await?;
    let fetched = repo.find_by_id(inserted.id()).await?;

    assert_eq!(fetched.as_ref(), Some(&inserted));
    assert_eq!(inserted.created_at(), inserted.updated_at());
    assert!(!inserted.is_archived());
    assert!(inserted.completed_at().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_fields_and_archive_flag() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let mut task = repo.insert(new_task("Plan trip")).await?;

    task.apply_update(
        TaskUpdate::new()
            .with_status(TaskStatus::Done)
            .with_description("Book hotels"),
        &DefaultClock,
    );
    task.archive();
    let updated = repo.update(&task).await?;

    assert_eq!(updated.status(), TaskStatus::Done);
    assert_eq!(updated.description(), Some("Book hotels"));
    assert!(updated.completed_at().is_some());
    assert!(updated.is_archived());
    assert!(updated.updated_at() >= updated.created_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_row_is_not_found() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let now = Utc::now();
    let ghost = Task::from_new(TaskId::new(), new_task("Ghost"), now, now);

    let result = repo.update(&ghost).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == ghost.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn keyword_search_is_literal_and_includes_archived() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let mut archived = repo.insert(new_task("Raise price 100%")).await?;
    archived.archive();
    repo.update(&archived).await?;
    repo.insert(new_task("Raise price 1000")).await?;

    let literal = repo.search_by_keyword("100%").await?;
    let folded = repo.search_by_keyword("RAISE").await?;

    assert_eq!(titles(&literal), vec!["Raise price 100%"]);
    assert_eq!(folded.len(), 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_exclude_archived_and_keep_creation_order() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    repo.insert(new_task("First")).await?;
    let mut hidden = repo.insert(new_task("Hidden")).await?;
    hidden.archive();
    repo.update(&hidden).await?;
    repo.insert(new_task("Second")).await?;

    let all = repo.find_all_non_archived().await?;
    let todo = repo.find_by_status(TaskStatus::Todo, true).await?;
    let medium = repo.find_by_priority(TaskPriority::Medium, true).await?;

    assert_eq!(titles(&all), vec!["First", "Second"]);
    assert_eq!(titles(&todo), vec!["First", "Second"]);
    assert_eq!(titles(&medium), vec!["First", "Second"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_skips_done_and_future_tasks() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let now = Utc::now().trunc_subsecs(0);
    repo.insert(NewTask {
        due_date: Some(now - Duration::hours(1)),
        ..new_task("Late")
    })
    .await?;
    repo.insert(NewTask {
        due_date: Some(now - Duration::hours(1)),
        status: TaskStatus::Done,
        ..new_task("Late but done")
    })
    .await?;
    repo.insert(NewTask {
        due_date: Some(now + Duration::hours(1)),
        ..new_task("Upcoming")
    })
    .await?;

    let overdue = repo.find_overdue(now).await?;

    assert_eq!(titles(&overdue), vec!["Late"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_snapshot_conflicts_and_cannot_unarchive() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let snapshot = repo.insert(new_task("Sell bike")).await?;
    let mut archived = snapshot.clone();
    archived.archive();
    repo.update(&archived).await?;

    let mut stale = snapshot.clone();
    stale.apply_update(TaskUpdate::new().with_title("Keep bike"), &DefaultClock);
    let result = repo.update(&stale).await;

    assert!(matches!(result, Err(TaskRepositoryError::Conflict(id)) if id == snapshot.id()));
    let stored = repo
        .find_by_id(snapshot.id())
        .await?
        .ok_or("archived task must still be stored")?;
    assert!(stored.is_archived());
    assert_eq!(stored.title(), "Sell bike");

    let mut fresh = stored.clone();
    fresh.apply_update(TaskUpdate::new().with_title("Sold bike"), &DefaultClock);
    let rewritten = repo.update(&fresh).await?;
    assert!(rewritten.is_archived());
    assert_eq!(rewritten.title(), "Sold bike");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn titles_beyond_the_default_limit_are_storable() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let title = "t".repeat(300);

    let inserted = repo.insert(new_task(&title)).await?;

    assert_eq!(inserted.title(), title);
    Ok(())
}
