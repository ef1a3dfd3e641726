//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Validate form input, commit to the session store, and report
//!   field-scoped issues in response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Validation failures commit nothing; success commits exactly once.
//! - Deleting a missing or malformed entry ID is a silent no-op.

use cvbuilder_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, validate_education, validate_experience, validate_personal_info, CvStore,
    Education, EntryId, Experience, FieldErrors, PersonalInfo,
};
use log::warn;
use std::sync::{Mutex, OnceLock};

static SESSION_STORE: OnceLock<Mutex<CvStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); an
///   empty string selects the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        default_log_level().to_string()
    } else {
        level
    };
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One field-scoped validation issue for form display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// External field name (`fullName`, `startDate`, ...).
    pub field: String,
    /// Human-readable reason shown next to the form input.
    pub message: String,
}

/// Response envelope for validate-and-commit form saves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSaveResponse {
    /// Whether the record was committed.
    pub ok: bool,
    /// Stable ID of the created list entry, when one was created.
    pub entry_id: Option<String>,
    /// Field-scoped issues; empty on success.
    pub issues: Vec<FieldIssue>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl FormSaveResponse {
    fn committed(message: impl Into<String>, entry_id: Option<String>) -> Self {
        Self {
            ok: true,
            entry_id,
            issues: Vec::new(),
            message: message.into(),
        }
    }

    fn rejected(errors: &FieldErrors) -> Self {
        // Metadata only; field values never reach the log.
        warn!(
            "event=form_rejected module=ffi status=error fields={}",
            errors.field_count()
        );
        Self {
            ok: false,
            entry_id: None,
            issues: errors
                .iter()
                .map(|(field, message)| FieldIssue {
                    field: field.to_string(),
                    message: message.to_string(),
                })
                .collect(),
            message: "Please correct the highlighted fields.".to_string(),
        }
    }
}

/// Response envelope for delete and reset actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether the action completed (a missing entry still completes).
    pub ok: bool,
    /// Whether an entry was actually removed.
    pub removed: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Personal-information form fields as entered on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfoForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

/// Experience form fields as entered on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceForm {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Education form fields as entered on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationForm {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_year: String,
}

/// Personal-information view for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfoView {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    /// Home-screen completion indicator: name and email present.
    pub complete: bool,
}

/// One experience list item for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub ongoing: bool,
    pub description: String,
}

/// One education list item for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_year: String,
}

/// Read-only aggregate snapshot for screen rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvSnapshot {
    pub personal_info: PersonalInfoView,
    pub experiences: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
}

/// Returns the current aggregate as a rendering snapshot.
///
/// # FFI contract
/// - Sync call, in-memory read.
/// - Never panics; list order matches insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn cv_snapshot() -> CvSnapshot {
    with_store(|store| {
        let data = store.data();
        CvSnapshot {
            personal_info: PersonalInfoView {
                full_name: data.personal_info.full_name.clone(),
                email: data.personal_info.email.clone(),
                phone: data.personal_info.phone.clone(),
                location: data.personal_info.location.clone(),
                summary: data.personal_info.summary.clone(),
                complete: data.personal_info.is_complete(),
            },
            experiences: data
                .experiences
                .iter()
                .map(|entry| ExperienceItem {
                    id: entry.id.to_string(),
                    company: entry.company.clone(),
                    position: entry.position.clone(),
                    start_date: entry.start_date.clone(),
                    end_date: entry.end_date.clone(),
                    ongoing: entry.is_ongoing(),
                    description: entry.description.clone(),
                })
                .collect(),
            education: data
                .education
                .iter()
                .map(|entry| EducationItem {
                    id: entry.id.to_string(),
                    institution: entry.institution.clone(),
                    degree: entry.degree.clone(),
                    field: entry.field.clone(),
                    graduation_year: entry.graduation_year.clone(),
                })
                .collect(),
        }
    })
}

/// Validates and saves the personal-information form.
///
/// # FFI contract
/// - Sync call; all-or-nothing commit.
/// - On failure returns field-scoped issues and changes nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn save_personal_info(form: PersonalInfoForm) -> FormSaveResponse {
    let candidate = PersonalInfo {
        full_name: form.full_name,
        email: form.email,
        phone: form.phone,
        location: form.location,
        summary: form.summary,
    };
    match validate_personal_info(candidate) {
        Ok(valid) => {
            with_store(|store| store.update_personal_info(valid));
            FormSaveResponse::committed("Personal information saved.", None)
        }
        Err(errors) => FormSaveResponse::rejected(&errors),
    }
}

/// Resets the personal-information singleton to empty defaults.
///
/// # FFI contract
/// - Sync call; always succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_personal_info() -> EntryActionResponse {
    with_store(CvStore::reset_personal_info);
    EntryActionResponse {
        ok: true,
        removed: false,
        message: "Personal information reset.".to_string(),
    }
}

/// Validates and appends one experience entry.
///
/// # FFI contract
/// - Sync call; all-or-nothing commit.
/// - On success returns the stable entry ID of the new list entry.
#[flutter_rust_bridge::frb(sync)]
pub fn add_experience(form: ExperienceForm) -> FormSaveResponse {
    let candidate = Experience::new(
        form.company,
        form.position,
        form.start_date,
        form.end_date,
        form.description,
    );
    match validate_experience(candidate) {
        Ok(valid) => {
            let id = with_store(|store| store.add_experience(valid));
            FormSaveResponse::committed("Experience added.", Some(id.to_string()))
        }
        Err(errors) => FormSaveResponse::rejected(&errors),
    }
}

/// Deletes one experience entry by stable ID.
///
/// # FFI contract
/// - Sync call; idempotent.
/// - A missing or malformed ID completes as a no-op, not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_experience(entry_id: String) -> EntryActionResponse {
    delete_entry(&entry_id, "Experience", |store, id| {
        store.delete_experience(id)
    })
}

/// Validates and appends one education entry.
///
/// # FFI contract
/// - Sync call; all-or-nothing commit.
/// - On success returns the stable entry ID of the new list entry.
#[flutter_rust_bridge::frb(sync)]
pub fn add_education(form: EducationForm) -> FormSaveResponse {
    let candidate = Education::new(
        form.institution,
        form.degree,
        form.field,
        form.graduation_year,
    );
    match validate_education(candidate) {
        Ok(valid) => {
            let id = with_store(|store| store.add_education(valid));
            FormSaveResponse::committed("Education added.", Some(id.to_string()))
        }
        Err(errors) => FormSaveResponse::rejected(&errors),
    }
}

/// Deletes one education entry by stable ID.
///
/// # FFI contract
/// - Sync call; idempotent.
/// - A missing or malformed ID completes as a no-op, not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_education(entry_id: String) -> EntryActionResponse {
    delete_entry(&entry_id, "Education", |store, id| {
        store.delete_education(id)
    })
}

fn delete_entry(
    entry_id: &str,
    label: &str,
    delete: impl FnOnce(&mut CvStore, EntryId) -> bool,
) -> EntryActionResponse {
    // A malformed ID cannot match any entry, so it falls under the same
    // silent no-op contract as a missing one.
    let removed = match uuid::Uuid::parse_str(entry_id.trim()) {
        Ok(id) => with_store(|store| delete(store, id)),
        Err(_) => false,
    };
    let message = if removed {
        format!("{label} entry deleted.")
    } else {
        "No matching entry.".to_string()
    };
    EntryActionResponse {
        ok: true,
        removed,
        message,
    }
}

fn with_store<T>(f: impl FnOnce(&mut CvStore) -> T) -> T {
    let store = SESSION_STORE.get_or_init(|| Mutex::new(CvStore::new()));
    match store.lock() {
        Ok(mut guard) => f(&mut guard),
        // The store holds plain data; a panic in a listener must not brick
        // every later call, so recover the poisoned value.
        Err(poisoned) => f(&mut poisoned.into_inner()),
    }
}
