//! The stylish format: braces, 4-space indent steps, and 2-character status
//! markers sitting two columns inside the enclosing brace.
//!
//! Diff entries at a level render in the tree's key order. Object-valued
//! leaves render as brace blocks in the value's natural key order — the
//! diff tree is sorted, leaf formatting is not.

use confdiff_diff::{DiffNode, DiffTree};
use serde_json::Value;

const INDENT_STEP: usize = 4;

fn indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_STEP)
}

/// Render a diff tree as a stylish report.
///
/// The report is `{`, one line per node (two for `Changed`: the old value
/// deleted-style, then the new value added-style), and `}`, joined with
/// newlines. No trailing newline; two empty documents render as `{\n}`.
pub fn render(tree: &DiffTree) -> String {
    render_level(tree, 1)
}

fn render_level(tree: &DiffTree, depth: usize) -> String {
    // Entry lines sit 2 columns short of a full indent step so the marker
    // lands just inside the enclosing brace.
    let entry = " ".repeat(depth * INDENT_STEP - 2);
    let close = indent(depth - 1);

    let mut lines = vec!["{".to_string()];
    for node in &tree.nodes {
        match node {
            DiffNode::Nested { key, children } => {
                lines.push(format!("{entry}  {key}: {}", render_level(children, depth + 1)));
            }
            DiffNode::Added { key, value } => {
                lines.push(format!("{entry}+ {key}: {}", format_value(value, depth + 1)));
            }
            DiffNode::Deleted { key, value } => {
                lines.push(format!("{entry}- {key}: {}", format_value(value, depth + 1)));
            }
            DiffNode::Unchanged { key, value } => {
                lines.push(format!("{entry}  {key}: {}", format_value(value, depth + 1)));
            }
            DiffNode::Changed { key, old, new } => {
                lines.push(format!("{entry}- {key}: {}", format_value(old, depth + 1)));
                lines.push(format!("{entry}+ {key}: {}", format_value(new, depth + 1)));
            }
        }
    }
    lines.push(format!("{close}}}"));

    lines.join("\n")
}

/// Format a leaf value at the given depth.
///
/// Scalars render in canonical textual form, strings without quotes, arrays
/// in compact JSON form. Objects render as a brace block, one line per key
/// in the value's natural iteration order, closing brace one step out.
fn format_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Object(map) => {
            let mut lines = vec!["{".to_string()];
            for (key, inner) in map {
                lines.push(format!("{}{key}: {}", indent(depth), format_value(inner, depth + 1)));
            }
            lines.push(format!("{}}}", indent(depth - 1)));
            lines.join("\n")
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
