//! CV record types and the aggregate root.
//!
//! # Responsibility
//! - Define `PersonalInfo`, `Experience`, `Education` and the `CvData`
//!   aggregate that owns them.
//! - Provide constructors that assign stable entry identifiers.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `end_date` equal to [`END_DATE_ONGOING`] marks an ongoing position.
//! - Records carry raw form text; correctness rules live in `validate`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every list entry in the aggregate.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// A random v4 id replaces the timestamp-derived tokens older clients used,
/// which could collide under rapid successive additions.
pub type EntryId = Uuid;

/// Sentinel value for `Experience::end_date` marking a current position.
///
/// The literal is part of the external schema and compares "after" any
/// dated `YYYY-MM` value in the ordering rule.
pub const END_DATE_ONGOING: &str = "Presente";

/// Singleton personal-information record.
///
/// Exactly one instance exists per CV. It is replaced wholesale on save and
/// never deleted, only reset to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    /// Optional; empty string means "not provided".
    pub phone: String,
    pub location: String,
    pub summary: String,
}

impl PersonalInfo {
    /// Returns whether the record counts as complete for the home screen
    /// indicator: name and email are both present.
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty() && !self.email.is_empty()
    }
}

/// One work-experience entry in the insertion-ordered experiences list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Stable entry ID used for deletion and list keys.
    pub id: EntryId,
    pub company: String,
    pub position: String,
    /// Zero-padded `YYYY-MM`.
    pub start_date: String,
    /// Zero-padded `YYYY-MM`, or [`END_DATE_ONGOING`].
    pub end_date: String,
    /// Optional; empty string means "no description".
    pub description: String,
}

impl Experience {
    /// Creates an entry with a freshly generated stable ID.
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            company,
            position,
            start_date,
            end_date,
            description,
        )
    }

    /// Creates an entry with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: EntryId,
        company: impl Into<String>,
        position: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            company: company.into(),
            position: position.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            description: description.into(),
        }
    }

    /// Returns whether this position is still held.
    pub fn is_ongoing(&self) -> bool {
        self.end_date == END_DATE_ONGOING
    }
}

/// One education entry in the insertion-ordered education list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// Stable entry ID used for deletion and list keys.
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    /// Optional field of study; empty string means "not provided".
    pub field: String,
    /// Optional 4-digit year; empty string means "not provided".
    pub graduation_year: String,
}

impl Education {
    /// Creates an entry with a freshly generated stable ID.
    pub fn new(
        institution: impl Into<String>,
        degree: impl Into<String>,
        field: impl Into<String>,
        graduation_year: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), institution, degree, field, graduation_year)
    }

    /// Creates an entry with a caller-provided stable ID.
    pub fn with_id(
        id: EntryId,
        institution: impl Into<String>,
        degree: impl Into<String>,
        field: impl Into<String>,
        graduation_year: impl Into<String>,
    ) -> Self {
        Self {
            id,
            institution: institution.into(),
            degree: degree.into(),
            field: field.into(),
            graduation_year: graduation_year.into(),
        }
    }
}

/// Aggregate root holding all CV data for one session.
///
/// Owned exclusively by the store; screens work on draft copies and commit
/// them through validated mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
}

impl CvData {
    /// Looks up one experience entry by stable ID.
    pub fn experience(&self, id: EntryId) -> Option<&Experience> {
        self.experiences.iter().find(|entry| entry.id == id)
    }

    /// Looks up one education entry by stable ID.
    pub fn education_entry(&self, id: EntryId) -> Option<&Education> {
        self.education.iter().find(|entry| entry.id == id)
    }
}
