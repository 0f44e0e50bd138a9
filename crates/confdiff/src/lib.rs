//! High-level API for confdiff.
//!
//! Composes the loader, tree builder, and stylish renderer into the two
//! operations most callers want: diff two in-memory documents, or diff two
//! files on disk. This is the entry point for applications embedding
//! confdiff.

use std::path::Path;

pub use confdiff_diff::{build, DiffNode, DiffTree, Document};
pub use confdiff_format::render;
pub use confdiff_loader::{load, parse, InputFormat, LoaderError, LoaderResult};

/// Compare two documents and render the stylish report.
pub fn compare_and_render(before: &Document, after: &Document) -> String {
    render(&build(before, after))
}

/// Load two document files and render the diff between them.
///
/// The files may use different formats; each is selected by its own
/// extension.
pub fn diff_files(before: impl AsRef<Path>, after: impl AsRef<Path>) -> LoaderResult<String> {
    let before = load(before.as_ref())?;
    let after = load(after.as_ref())?;
    Ok(compare_and_render(&before, &after))
}
