//! `PostgreSQL` repository implementation for category storage.

use super::{models::CategoryRow, schema::categories};
use crate::category::{
    domain::{Category, CategoryColor, CategoryIcon, CategoryId, CategoryName},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};
use crate::task::adapters::postgres::TaskPgPool;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed category repository.
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: TaskPgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CategoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CategoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CategoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CategoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let row = to_row(category);
        let name = category.name().clone();
        self.run_blocking(move |connection| {
            diesel::insert_into(categories::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CategoryRepositoryError::DuplicateName(name.clone())
                    }
                    _ => CategoryRepositoryError::persistence(err),
                })?;
            tracing::debug!(category_id = %row.id, "inserted category");
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::id.eq(id.into_inner()))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn find_by_name(
        &self,
        name: &CategoryName,
    ) -> CategoryRepositoryResult<Option<Category>> {
        let lookup = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::name.eq(lookup))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn exists_by_name(&self, name: &CategoryName) -> CategoryRepositoryResult<bool> {
        let lookup = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                categories::table.filter(categories::name.eq(lookup)),
            ))
            .get_result::<bool>(connection)
            .map_err(CategoryRepositoryError::persistence)
        })
        .await
    }

    async fn list_ordered_by_name(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.run_blocking(|connection| {
            let rows = categories::table
                .order(categories::name.asc())
                .select(CategoryRow::as_select())
                .load::<CategoryRow>(connection)
                .map_err(CategoryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_category).collect()
        })
        .await
    }
}

fn to_row(category: &Category) -> CategoryRow {
    CategoryRow {
        id: category.id().into_inner(),
        name: category.name().as_str().to_owned(),
        color: category.color().as_str().to_owned(),
        icon: category.icon().map(|icon| icon.as_str().to_owned()),
        created_at: category.created_at(),
    }
}

fn row_to_category(row: CategoryRow) -> CategoryRepositoryResult<Category> {
    let name = CategoryName::new(row.name).map_err(CategoryRepositoryError::persistence)?;
    let color = CategoryColor::new(row.color).map_err(CategoryRepositoryError::persistence)?;
    let icon = row
        .icon
        .map(CategoryIcon::new)
        .transpose()
        .map_err(CategoryRepositoryError::persistence)?;
    Ok(Category::from_persisted(
        CategoryId::from_uuid(row.id),
        name,
        color,
        icon,
        row.created_at,
    ))
}
