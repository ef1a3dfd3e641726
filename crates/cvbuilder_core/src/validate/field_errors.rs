//! Field-scoped validation error collection.
//!
//! # Responsibility
//! - Accumulate one or more human-readable reasons per violated field.
//! - Keep field keys in the external camelCase schema naming so the
//!   presentation layer can attach messages to form inputs directly.
//!
//! # Invariants
//! - Iteration order over fields is stable (sorted by field name).
//! - An empty collection is never returned as the failure value.

use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure mapping field names to human-readable reasons.
///
/// Field names use the external schema spelling (`fullName`, `startDate`,
/// ...), not the Rust struct field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one reason against a field. A field may accumulate several.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of distinct violated fields.
    pub fn field_count(&self) -> usize {
        self.errors.len()
    }

    /// Violated field names in stable sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    /// Reasons recorded against one field, empty when the field passed.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Flat `(field, message)` view for transport envelopes.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(|msg| (*field, msg.as_str())))
    }

    /// Converts an accumulated check run into a validation result.
    ///
    /// Returns `Ok(value)` when no field was violated.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::FieldErrors;

    #[test]
    fn push_accumulates_multiple_reasons_per_field() {
        let mut errors = FieldErrors::new();
        errors.push("email", "must be a valid email address");
        errors.push("email", "must be at most 100 characters");

        assert_eq!(errors.field_count(), 1);
        assert_eq!(errors.messages_for("email").len(), 2);
    }

    #[test]
    fn fields_iterate_in_sorted_order() {
        let mut errors = FieldErrors::new();
        errors.push("summary", "too short");
        errors.push("fullName", "too short");

        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["fullName", "summary"]);
    }

    #[test]
    fn display_joins_field_and_message() {
        let mut errors = FieldErrors::new();
        errors.push("location", "location is required");

        assert_eq!(errors.to_string(), "location: location is required");
    }

    #[test]
    fn into_result_returns_value_when_empty() {
        let errors = FieldErrors::new();
        assert_eq!(errors.into_result(7), Ok(7));
    }

    #[test]
    fn serializes_as_a_plain_field_to_messages_map() {
        let mut errors = FieldErrors::new();
        errors.push("graduationYear", "must be a 4-digit year");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["graduationYear"][0], "must be a 4-digit year");
    }
}
