//! Taskboard: personal task tracking core.
//!
//! This crate provides the domain and service layer for creating, updating,
//! categorizing, filtering, searching, completing and archiving tasks.
//! Routing, rendering and authentication are left to the caller.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, validation, filtering and search
//! - [`category`]: Lightweight task categories
//! - [`config`]: Database configuration and pool construction

pub mod category;
pub mod config;
pub mod task;
