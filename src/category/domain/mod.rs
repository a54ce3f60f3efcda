//! Domain model for task categories.

mod category;
mod error;
mod ids;

pub use category::{Category, CategoryColor, CategoryIcon, CategoryName};
pub use error::CategoryDomainError;
pub use ids::CategoryId;
