//! Error types for category validation.

use thiserror::Error;

/// Errors returned while constructing category values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryDomainError {
    /// The name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyName,

    /// The name exceeds the character limit.
    #[error("category name must be at most {max} characters, got {actual}")]
    NameTooLong {
        /// Maximum permitted characters.
        max: usize,
        /// Characters supplied.
        actual: usize,
    },

    /// The colour is not a `#RRGGBB` hex string.
    #[error("invalid category colour '{0}', expected #RRGGBB")]
    InvalidColor(String),

    /// The icon label exceeds the character limit.
    #[error("category icon must be at most {max} characters, got {actual}")]
    IconTooLong {
        /// Maximum permitted characters.
        max: usize,
        /// Characters supplied.
        actual: usize,
    },
}
