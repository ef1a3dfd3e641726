//! Core domain logic for CvBuilder.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cv::{CvData, Education, EntryId, Experience, PersonalInfo, END_DATE_ONGOING};
pub use store::{CvStore, StoreEvent, SubscriptionId};
pub use validate::field_errors::FieldErrors;
pub use validate::rules::{
    validate_education, validate_experience, validate_personal_info, ValidEducation,
    ValidExperience, ValidPersonalInfo,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
