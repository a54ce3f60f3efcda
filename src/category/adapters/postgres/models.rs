//! Diesel row models for category persistence.

use super::schema::categories;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row shape shared by inserts and queries.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    /// Category identifier.
    pub id: uuid::Uuid,
    /// Unique category name.
    pub name: String,
    /// Display colour.
    pub color: String,
    /// Optional icon label.
    pub icon: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
