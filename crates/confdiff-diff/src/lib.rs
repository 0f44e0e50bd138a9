//! Diff-tree construction for configuration documents.
//!
//! Compares two parsed documents (string keys mapping to scalars or nested
//! objects) and produces an ordered [`DiffTree`] recording, per key, whether
//! the entry was added, deleted, changed, unchanged, or needs nested
//! comparison.
//!
//! # Key Types
//!
//! - [`Document`] — a parsed mapping (`serde_json::Map<String, Value>`)
//! - [`DiffTree`] / [`DiffNode`] — per-key comparison outcomes
//! - [`build`] — the comparison entry point

pub mod tree;

pub use tree::{build, DiffNode, DiffTree, Document};
