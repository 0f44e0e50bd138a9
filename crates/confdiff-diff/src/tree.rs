//! Document diff tree: compare two parsed documents key by key.
//!
//! The diff walks the union of keys at each nesting level in sorted order,
//! recursing where both sides hold an object and recording additions,
//! deletions, value changes, and unchanged entries everywhere else.

use serde_json::Value;

/// A parsed hierarchical document: string keys mapping to scalar or nested
/// object values. Insertion order is preserved (`serde_json/preserve_order`)
/// so object-valued leaves render in their natural key order.
pub type Document = serde_json::Map<String, Value>;

/// The result of comparing two documents at one nesting level.
///
/// Nodes are sorted ascending by key (byte-wise), one node per key present
/// in either input. A [`DiffNode::Nested`] node carries a complete,
/// independently sorted subtree for the sub-documents under its key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffTree {
    /// The per-key comparison outcomes, in key order.
    pub nodes: Vec<DiffNode>,
}

impl DiffTree {
    /// Create an empty diff tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes at this level.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of added keys at this level.
    pub fn additions(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, DiffNode::Added { .. }))
            .count()
    }

    /// Number of deleted keys at this level.
    pub fn deletions(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, DiffNode::Deleted { .. }))
            .count()
    }

    /// Number of changed keys at this level.
    pub fn changes(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, DiffNode::Changed { .. }))
            .count()
    }

    /// Returns `true` if nothing differs: every node is `Unchanged`, or
    /// `Nested` over an all-unchanged subtree.
    pub fn is_unchanged(&self) -> bool {
        self.nodes.iter().all(|n| match n {
            DiffNode::Unchanged { .. } => true,
            DiffNode::Nested { children, .. } => children.is_unchanged(),
            _ => false,
        })
    }
}

/// One per-key comparison outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum DiffNode {
    /// Both sides hold an object under this key; compared recursively.
    Nested { key: String, children: DiffTree },
    /// The key only exists in the new document.
    Added { key: String, value: Value },
    /// The key only exists in the old document.
    Deleted { key: String, value: Value },
    /// The key exists on both sides with unequal leaf values.
    Changed { key: String, old: Value, new: Value },
    /// The key exists on both sides with equal leaf values.
    Unchanged { key: String, value: Value },
}

impl DiffNode {
    /// The key this node describes.
    pub fn key(&self) -> &str {
        match self {
            DiffNode::Nested { key, .. }
            | DiffNode::Added { key, .. }
            | DiffNode::Deleted { key, .. }
            | DiffNode::Changed { key, .. }
            | DiffNode::Unchanged { key, .. } => key,
        }
    }
}

/// Compare two documents and produce a sorted diff tree.
///
/// Keys present only in `after` are `Added`, keys present only in `before`
/// are `Deleted`. When both sides hold an object the key is `Nested` and the
/// sub-documents are compared recursively; any other combination is compared
/// as leaf values. A key that is an object on one side and a leaf on the
/// other is therefore `Changed`, never `Nested`.
pub fn build(before: &Document, after: &Document) -> DiffTree {
    let mut keys: Vec<&str> = before
        .keys()
        .chain(after.keys())
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys.dedup();

    let nodes = keys
        .into_iter()
        .map(|key| classify(key, before.get(key), after.get(key)))
        .collect();

    DiffTree { nodes }
}

fn classify(key: &str, old: Option<&Value>, new: Option<&Value>) -> DiffNode {
    let key = key.to_string();
    match (old, new) {
        (Some(Value::Object(before)), Some(Value::Object(after))) => DiffNode::Nested {
            key,
            children: build(before, after),
        },
        (None, Some(new)) => DiffNode::Added {
            key,
            value: new.clone(),
        },
        (Some(old), None) => DiffNode::Deleted {
            key,
            value: old.clone(),
        },
        (Some(old), Some(new)) if !leaf_eq(old, new) => DiffNode::Changed {
            key,
            old: old.clone(),
            new: new.clone(),
        },
        (Some(old), Some(_)) => DiffNode::Unchanged {
            key,
            value: old.clone(),
        },
        // Every key comes from the union of both documents.
        (None, None) => unreachable!("key absent from both documents"),
    }
}

/// Leaf-value equality. An object on either side never compares equal: the
/// both-objects case was already taken by `Nested`, so a remaining object is
/// a type change. All other values (including arrays) compare by value.
fn leaf_eq(old: &Value, new: &Value) -> bool {
    match (old, new) {
        (Value::Object(_), _) | (_, Value::Object(_)) => false,
        _ => old == new,
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    fn leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::String),
        ]
    }

    fn document() -> impl Strategy<Value = Document> {
        let value = leaf().prop_recursive(3, 24, 4, |inner| {
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect()))
        });
        prop::collection::btree_map("[a-z]{1,4}", value, 0..5)
            .prop_map(|m| m.into_iter().collect())
    }

    fn sorted_at_every_level(tree: &DiffTree) -> bool {
        tree.nodes.windows(2).all(|w| w[0].key() < w[1].key())
            && tree.nodes.iter().all(|n| match n {
                DiffNode::Nested { children, .. } => sorted_at_every_level(children),
                _ => true,
            })
    }

    proptest! {
        #[test]
        fn self_diff_is_unchanged(d in document()) {
            prop_assert!(build(&d, &d).is_unchanged());
        }

        #[test]
        fn keys_sorted_recursively(a in document(), b in document()) {
            prop_assert!(sorted_at_every_level(&build(&a, &b)));
        }

        #[test]
        fn build_is_deterministic(a in document(), b in document()) {
            prop_assert_eq!(build(&a, &b), build(&a, &b));
        }

        #[test]
        fn every_union_key_appears_once(a in document(), b in document()) {
            let diff = build(&a, &b);
            let mut expected: Vec<&str> =
                a.keys().chain(b.keys()).map(String::as_str).collect();
            expected.sort_unstable();
            expected.dedup();
            let got: Vec<&str> = diff.nodes.iter().map(DiffNode::key).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
