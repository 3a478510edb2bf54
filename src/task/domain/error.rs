//! Error types for task domain validation and parsing.

use std::collections::BTreeMap;
use thiserror::Error;

/// Error returned while parsing task statuses from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Accumulated field-level validation failures.
///
/// Collects every violated field rather than stopping at the first, so the
/// transport layer can report all problems in a single response. Backed by a
/// `BTreeMap` for deterministic field ordering.
#[derive(Debug, Clone, Default, Error, PartialEq, Eq, serde::Serialize)]
#[error("validation failed: {}", format_fields(.0))]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

fn format_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{field} {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Creates an empty set of validation errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure message against a field.
    ///
    /// The first message recorded for a field wins; later messages for the
    /// same field are ignored.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Returns `true` when no field has failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message recorded for a field, if any.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}
