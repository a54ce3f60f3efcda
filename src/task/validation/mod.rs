//! Task input validation.
//!
//! Rules are pure functions over request fields. The create path runs the
//! full set; the update path only re-checks length limits, because a blank
//! incoming title is ignored on update rather than rejected.

mod config;
pub mod rules;

pub use config::TaskValidationConfig;
