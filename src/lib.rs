//! Taskdesk: a small task management service exposed over HTTP.
//!
//! Clients submit task data; the crate validates it, persists it through a
//! repository port, assigns identity, tracks a status progression, and
//! returns the current representation on demand.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Task domain model, persistence port, and business services
//! - [`api`]: HTTP request handlers, wire DTOs, and error translation

pub mod api;
pub mod task;
