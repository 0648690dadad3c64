//! Domain-level errors

use std::fmt;

use thiserror::Error;

use crate::value_objects::TidError;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A query produced no usable location
    #[error("Location not found: {0}")]
    NotFound(String),

    /// A transit ID could not be decoded
    #[error(transparent)]
    InvalidTid(#[from] TidError),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

/// A single field of a provider record that failed to parse
///
/// Field parse errors are never fatal: the field falls back to its
/// sentinel value and the error is reported alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} '{value}': {reason}")]
pub struct FieldParseError {
    /// Name of the record field (`osm_id`, `lat`, `lon`)
    pub field: &'static str,
    /// The raw text that failed to parse
    pub value: String,
    /// Parser message
    pub reason: String,
}

impl FieldParseError {
    /// Create a new field parse error
    pub fn new(field: &'static str, value: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Every field parse error collected while assembling one or more records
///
/// Errors are appended in the order they occur; a later failure never
/// replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldParseError>);

impl FieldErrors {
    /// Create an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record one more error
    pub fn push(&mut self, error: FieldParseError) {
        self.0.push(error);
    }

    /// Move all errors of `other` into this collection
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// True when nothing failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of collected errors
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when `field` failed at least once
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// Iterate over the collected errors
    pub fn iter(&self) -> impl Iterator<Item = &FieldParseError> {
        self.0.iter()
    }

    /// `None` when empty, otherwise the combined error
    #[must_use]
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl From<FieldParseError> for FieldErrors {
    fn from(error: FieldParseError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldParseError;
    type IntoIter = std::vec::IntoIter<FieldParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
