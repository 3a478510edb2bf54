//! HTTP boundary for the task resource.
//!
//! The routing and dispatch machinery itself is axum's concern; this module
//! owns everything with decision logic at the boundary: wire DTOs and
//! structural validation in [`dto`], request handlers and router
//! construction in [`handlers`], and the single error-to-response
//! translation policy in [`error`].

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::{AppState, router};
