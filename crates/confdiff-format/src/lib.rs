//! Stylish text rendering for confdiff diff trees.
//!
//! Turns a [`confdiff_diff::DiffTree`] into the brace-delimited, indented
//! report format: entries prefixed with `+` / `-` status markers, nested
//! trees rendered recursively one indent level deeper.

pub mod stylish;

pub use stylish::render;
