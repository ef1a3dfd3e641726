//! FFI crate exposing the CvBuilder core to the Flutter UI.

pub mod api;
