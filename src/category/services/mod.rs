//! Application services for categories.

mod catalog;

pub use catalog::{
    CategoryService, CategoryServiceError, CategoryServiceResult, CreateCategoryRequest,
};
