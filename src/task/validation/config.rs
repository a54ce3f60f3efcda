//! Configuration for task validation limits.

/// Limits applied to task text fields.
///
/// # Examples
///
/// ```
/// use taskboard::task::validation::TaskValidationConfig;
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.max_title_chars, 200);
/// assert_eq!(config.max_description_chars, 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskValidationConfig {
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
}

impl TaskValidationConfig {
    /// Default maximum title length.
    pub const DEFAULT_MAX_TITLE_CHARS: usize = 200;

    /// Default maximum description length.
    pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 5000;

    /// Overrides the title limit.
    ///
    /// Both stores keep titles as unbounded text, so any limit is
    /// persistable.
    #[must_use]
    pub const fn with_max_title_chars(mut self, max: usize) -> Self {
        self.max_title_chars = max;
        self
    }

    /// Overrides the description limit.
    #[must_use]
    pub const fn with_max_description_chars(mut self, max: usize) -> Self {
        self.max_description_chars = max;
        self
    }
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            max_title_chars: Self::DEFAULT_MAX_TITLE_CHARS,
            max_description_chars: Self::DEFAULT_MAX_DESCRIPTION_CHARS,
        }
    }
}
