//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::category::domain::CategoryId;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::dsl::now;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Creation and update timestamps come from the database clock.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }

    async fn load_many<F>(&self, query: F) -> TaskRepositoryResult<Vec<Task>>
    where
        F: FnOnce(&mut PgConnection) -> QueryResult<Vec<TaskRow>> + Send + 'static,
    {
        self.run_blocking(move |connection| {
            let rows = query(connection).map_err(TaskRepositoryError::persistence)?;
            tracing::debug!(rows = rows.len(), "loaded task rows");
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(TaskId::new(), task);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            tracing::debug!(task_id = %row.id, "inserted task");
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let read_at = task.updated_at();
        let archived = task.is_archived();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let target = tasks::table
                .filter(tasks::id.eq(task_id.into_inner()))
                .filter(tasks::updated_at.eq(read_at));
            let row = diesel::update(target)
                .set((
                    &changeset,
                    tasks::archived.eq(tasks::archived.or(archived.into_sql::<diesel::sql_types::Bool>())),
                    tasks::updated_at.eq(now),
                ))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            let Some(stored) = row else {
                return Err(stale_write_error(connection, task_id));
            };
            tracing::debug!(%task_id, "updated task");
            row_to_task(stored)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_status(
        &self,
        status: TaskStatus,
        exclude_archived: bool,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.load_many(move |connection| {
            let mut query = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .into_boxed();
            if exclude_archived {
                query = query.filter(tasks::archived.eq(false));
            }
            query
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_by_priority(
        &self,
        priority: TaskPriority,
        exclude_archived: bool,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.load_many(move |connection| {
            let mut query = tasks::table
                .filter(tasks::priority.eq(priority.as_str()))
                .into_boxed();
            if exclude_archived {
                query = query.filter(tasks::archived.eq(false));
            }
            query
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_all_non_archived(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.load_many(|connection| {
            tasks::table
                .filter(tasks::archived.eq(false))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn search_by_keyword(&self, keyword: &str) -> TaskRepositoryResult<Vec<Task>> {
        let pattern = format!("%{}%", escape_like(keyword));
        self.load_many(move |connection| {
            tasks::table
                .filter(
                    tasks::title
                        .ilike(pattern.clone())
                        .or(tasks::description.ilike(pattern)),
                )
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_overdue(&self, now_at: DateTime<Utc>) -> TaskRepositoryResult<Vec<Task>> {
        self.load_many(move |connection| {
            tasks::table
                .filter(tasks::archived.eq(false))
                .filter(tasks::status.ne(TaskStatus::Done.as_str()))
                .filter(tasks::due_date.lt(now_at))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }
}

/// Escapes `LIKE` metacharacters so the keyword matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn to_new_row(id: TaskId, task: NewTask) -> NewTaskRow {
    NewTaskRow {
        id: id.into_inner(),
        title: task.title,
        description: task.description,
        status: task.status.as_str().to_owned(),
        priority: task.priority.as_str().to_owned(),
        category_id: task.category_id.map(CategoryId::into_inner),
        due_date: task.due_date,
        archived: false,
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        category_id: task.category_id().map(CategoryId::into_inner),
        due_date: task.due_date(),
        completed_at: task.completed_at(),
    }
}

/// Classifies an update that matched no row.
fn stale_write_error(connection: &mut PgConnection, task_id: TaskId) -> TaskRepositoryError {
    let exists = diesel::select(diesel::dsl::exists(
        tasks::table.filter(tasks::id.eq(task_id.into_inner())),
    ))
    .get_result::<bool>(connection);
    match exists {
        Ok(true) => {
            tracing::debug!(%task_id, "rejected stale task write");
            TaskRepositoryError::Conflict(task_id)
        }
        Ok(false) => TaskRepositoryError::NotFound(task_id),
        Err(err) => TaskRepositoryError::persistence(err),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status: persisted_status,
        priority: persisted_priority,
        category_id,
        due_date,
        completed_at,
        archived,
        created_at,
        updated_at,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str()).map_err(|err| {
        tracing::warn!(task_id = %id, %err, "undecodable task status");
        TaskRepositoryError::persistence(err)
    })?;
    let priority = TaskPriority::try_from(persisted_priority.as_str()).map_err(|err| {
        tracing::warn!(task_id = %id, %err, "undecodable task priority");
        TaskRepositoryError::persistence(err)
    })?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status,
        priority,
        due_date,
        completed_at,
        category_id: category_id.map(CategoryId::from_uuid),
        archived,
        created_at,
        updated_at,
    }))
}
