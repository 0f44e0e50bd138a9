//! Document loading for confdiff.
//!
//! Reads serialized configuration files (JSON or TOML, selected by file
//! extension), parses them, and validates that the top level is a mapping
//! before handing a [`Document`](confdiff_diff::Document) to the diff.

pub mod error;
pub mod load;

pub use error::{LoaderError, LoaderResult};
pub use load::{load, parse, InputFormat};
