//! Domain model for the CV aggregate.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one aggregate shape shared by every form screen projection.
//!
//! # Invariants
//! - List entries are identified by a stable `EntryId`.
//! - The aggregate lives in memory only; there is no persisted layout.

pub mod cv;
