//! Task lifecycle management for Taskdesk.
//!
//! This module implements the request-to-persistence pipeline for the task
//! resource: the domain model with its status enumeration, the pure mapping
//! layer between domain tasks and storage records, the repository port with
//! its in-memory adapter, and the business-rule service that orchestrates
//! them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Record/domain translation in [`mapper`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod mapper;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
