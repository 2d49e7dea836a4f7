#![allow(dead_code)]

use std::collections::BTreeMap;

use holdtree::{Node, RadixTree};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Walks every node, asserting the structural invariants, and returns every stored
/// key/value pair in byte order.
///
/// Checked: the root has an empty prefix, every other node a non-empty one; each edge label
/// is its child's first prefix byte; siblings are strictly ascending by label; each leaf's key
/// equals the concatenation of the prefixes from the root down to it.
pub fn collect_checked<V: Clone>(tree: &RadixTree<V>) -> BTreeMap<Vec<u8>, V> {
    assert!(tree.root().prefix().is_empty(), "root must have no prefix");
    let mut out = BTreeMap::new();
    walk(tree.root(), &mut Vec::new(), &mut out);
    assert_eq!(out.len(), tree.len());
    out
}

fn walk<V: Clone>(node: &Node<V>, path: &mut Vec<u8>, out: &mut BTreeMap<Vec<u8>, V>) {
    let depth = path.len();
    path.extend_from_slice(node.prefix());

    if let Some(leaf) = node.leaf() {
        assert_eq!(leaf.key(), &path[..], "leaf key does not match its path");
        let dup = out.insert(path.clone(), leaf.value().clone());
        assert!(dup.is_none(), "key {:?} stored twice", path);
    }

    let mut last_label = None;
    for edge in node.edges() {
        let child = edge.child();
        assert!(!child.prefix().is_empty(), "child with empty prefix");
        assert_eq!(edge.label(), child.prefix()[0], "label is not first prefix byte");
        if let Some(last) = last_label {
            assert!(last < edge.label(), "edges out of order under {:?}", path);
        }
        last_label = Some(edge.label());
        walk(child, path, out);
    }

    path.truncate(depth);
}

/// Path compression: apart from the root, a node without a leaf always has at least two
/// children.
pub fn assert_compressed<V>(tree: &RadixTree<V>) {
    fn check<V>(node: &Node<V>, is_root: bool) {
        if !is_root && node.leaf().is_none() {
            assert!(
                node.num_children() >= 2,
                "uncompressed inner node {:?}",
                String::from_utf8_lossy(node.prefix())
            );
        }
        for edge in node.edges() {
            check(edge.child(), false);
        }
    }
    check(tree.root(), true);
}
