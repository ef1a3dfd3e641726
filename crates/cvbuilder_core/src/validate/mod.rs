//! Validation layer for CV records.
//!
//! # Responsibility
//! - Check candidate records against field constraints before commit.
//! - Report every violated field at once, keyed by external field name.
//!
//! # Invariants
//! - Validation is pure and deterministic; it never mutates state.
//! - Successful validation yields a typed wrapper the store accepts.

pub mod field_errors;
pub mod rules;
