//! Task tracking for Taskboard.
//!
//! Tasks are created with `TODO`/`MEDIUM` defaults, changed through partial
//! updates, completed, and archived instead of deleted. Archived tasks drop
//! out of status, priority and unfiltered listings but stay retrievable by
//! identifier and through keyword search. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Input rules in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
