//! Task categories.
//!
//! Categories are a lightweight grouping with a unique name, a display
//! colour and an optional icon. Tasks reference them informationally; no
//! cascading relationship is enforced.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
