//! In-memory adapters for categories.

mod category;

pub use category::InMemoryCategoryRepository;
