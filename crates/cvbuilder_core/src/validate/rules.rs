//! Validation rules per record type.
//!
//! # Responsibility
//! - Apply field constraints and the start/end ordering rule to candidates.
//! - Produce typed proof-of-validity wrappers consumed by the store.
//!
//! # Invariants
//! - Every violated field is reported, not just the first one found.
//! - Optional fields holding an empty string skip their format check.
//! - The cross-field date rule only fires on well-formed dated values and
//!   attaches its reason to `endDate`.

use crate::model::cv::{Education, Experience, PersonalInfo, END_DATE_ONGOING};
use crate::validate::field_errors::FieldErrors;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?\d{1,3}[-. ]?)?(\d{2,4}[-. ]?){1,5}\d{1,4}$").expect("valid phone regex")
});
static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid month regex"));
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("valid year regex"));

/// Personal information that passed [`validate_personal_info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPersonalInfo(PersonalInfo);

impl ValidPersonalInfo {
    pub fn get(&self) -> &PersonalInfo {
        &self.0
    }

    pub fn into_inner(self) -> PersonalInfo {
        self.0
    }
}

/// Experience entry that passed [`validate_experience`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidExperience(Experience);

impl ValidExperience {
    pub fn get(&self) -> &Experience {
        &self.0
    }

    pub fn into_inner(self) -> Experience {
        self.0
    }
}

/// Education entry that passed [`validate_education`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEducation(Education);

impl ValidEducation {
    pub fn get(&self) -> &Education {
        &self.0
    }

    pub fn into_inner(self) -> Education {
        self.0
    }
}

/// Checks the five personal-information field constraints.
///
/// # Contract
/// - `fullName` 5-150 chars, `location` 2-100 chars, `summary` 20-1000 chars.
/// - `email` must use valid email syntax and stay within 100 chars.
/// - `phone` is optional; a non-empty value must match the loose
///   international phone pattern.
pub fn validate_personal_info(
    candidate: PersonalInfo,
) -> Result<ValidPersonalInfo, FieldErrors> {
    let mut errors = FieldErrors::new();

    require_length(&mut errors, "fullName", &candidate.full_name, 5, 150);
    if !EMAIL_RE.is_match(&candidate.email) {
        errors.push("email", "must be a valid email address");
    }
    limit_length(&mut errors, "email", &candidate.email, 100);
    if !candidate.phone.is_empty() && !PHONE_RE.is_match(&candidate.phone) {
        errors.push("phone", "phone number format is not valid");
    }
    require_length(&mut errors, "location", &candidate.location, 2, 100);
    require_length(&mut errors, "summary", &candidate.summary, 20, 1000);

    errors.into_result(ValidPersonalInfo(candidate))
}

/// Checks experience field constraints, then the start/end ordering rule.
///
/// # Contract
/// - `startDate` must be `YYYY-MM`; `endDate` must be `YYYY-MM` or the
///   ongoing sentinel.
/// - When both dates are well-formed and `endDate` is dated, it must not
///   precede `startDate`; the violation is reported on `endDate`.
/// - An empty `description` means "no description" and always passes.
pub fn validate_experience(candidate: Experience) -> Result<ValidExperience, FieldErrors> {
    let mut errors = FieldErrors::new();

    require_length(&mut errors, "company", &candidate.company, 2, 100);
    require_length(&mut errors, "position", &candidate.position, 2, 100);

    let start_ok = MONTH_RE.is_match(&candidate.start_date);
    if !start_ok {
        errors.push("startDate", "start date must use the YYYY-MM format");
    }
    let end_is_ongoing = candidate.end_date == END_DATE_ONGOING;
    let end_ok = end_is_ongoing || MONTH_RE.is_match(&candidate.end_date);
    if !end_ok {
        errors.push(
            "endDate",
            format!("end date must be YYYY-MM or '{END_DATE_ONGOING}'"),
        );
    }
    limit_length(&mut errors, "description", &candidate.description, 500);

    // Fixed-width zero-padded YYYY-MM makes lexicographic order equal to
    // chronological order. The ongoing sentinel sorts after every date.
    if start_ok && end_ok && !end_is_ongoing && candidate.start_date > candidate.end_date {
        errors.push("endDate", "end date cannot be earlier than start date");
    }

    errors.into_result(ValidExperience(candidate))
}

/// Checks education field constraints.
///
/// # Contract
/// - `institution` and `degree` are required, 3-100 chars each.
/// - `field` is free-form and optional.
/// - A non-empty `graduationYear` must be a 4-digit year.
pub fn validate_education(candidate: Education) -> Result<ValidEducation, FieldErrors> {
    let mut errors = FieldErrors::new();

    require_length(&mut errors, "institution", &candidate.institution, 3, 100);
    require_length(&mut errors, "degree", &candidate.degree, 3, 100);
    if !candidate.graduation_year.is_empty() && !YEAR_RE.is_match(&candidate.graduation_year) {
        errors.push(
            "graduationYear",
            "graduation year must be a 4-digit year (for example, 2024)",
        );
    }

    errors.into_result(ValidEducation(candidate))
}

/// Length bounds in Unicode scalar values, matching client-side counting.
fn require_length(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let chars = value.chars().count();
    if chars < min || chars > max {
        errors.push(field, format!("must be between {min} and {max} characters"));
    }
}

fn limit_length(errors: &mut FieldErrors, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(field, format!("must be at most {max} characters"));
    }
}
