//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cvbuilder_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cvbuilder_core::{validate_education, CvStore, Education};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("cvbuilder_core ping={}", cvbuilder_core::ping());
    println!("cvbuilder_core version={}", cvbuilder_core::core_version());

    let mut store = CvStore::new();
    let entry = validate_education(Education::new("Sample University", "BSc", "", "2020"))
        .expect("smoke fixture is valid by construction");
    let id = store.add_education(entry);
    println!("store education_count={}", store.data().education.len());
    store.delete_education(id);
    println!("store education_count={}", store.data().education.len());
}
