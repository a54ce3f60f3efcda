//! Category entity and its validated fields.

use super::{CategoryDomainError, CategoryId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, non-empty category name of at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Maximum name length in characters.
    pub const MAX_CHARS: usize = 100;

    /// Creates a validated, trimmed category name.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::EmptyName`] for blank input and
    /// [`CategoryDomainError::NameTooLong`] when over the limit.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryDomainError::EmptyName);
        }
        let actual = trimmed.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(CategoryDomainError::NameTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display colour in `#RRGGBB` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryColor(String);

impl CategoryColor {
    /// Colour assigned when none is given.
    pub const DEFAULT: &'static str = "#3B82F6";

    /// Creates a validated colour, normalized to upper case.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::InvalidColor`] unless the value is `#`
    /// followed by exactly six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let is_valid = trimmed.strip_prefix('#').is_some_and(|digits| {
            digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
        });
        if !is_valid {
            return Err(CategoryDomainError::InvalidColor(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the colour as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryColor {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

/// Short icon label of at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryIcon(String);

impl CategoryIcon {
    /// Maximum icon label length in characters.
    pub const MAX_CHARS: usize = 50;

    /// Creates a validated icon label.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::IconTooLong`] when over the limit.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryDomainError> {
        let raw = value.into();
        let actual = raw.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(CategoryDomainError::IconTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the icon label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Category entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
    color: CategoryColor,
    icon: Option<CategoryIcon>,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new category stamped with the current time.
    #[must_use]
    pub fn new(
        name: CategoryName,
        color: CategoryColor,
        icon: Option<CategoryIcon>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name,
            color,
            icon,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a category from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: CategoryId,
        name: CategoryName,
        color: CategoryColor,
        icon: Option<CategoryIcon>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            color,
            icon,
            created_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub const fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Returns the display colour.
    #[must_use]
    pub const fn color(&self) -> &CategoryColor {
        &self.color
    }

    /// Returns the icon label, if any.
    #[must_use]
    pub const fn icon(&self) -> Option<&CategoryIcon> {
        self.icon.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
