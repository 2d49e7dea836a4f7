//! Path-compressed radix tree.
//!
//! This module contains [`RadixTree`] and the insertion algorithm that keeps it compressed:
//! every inserted key either updates the leaf of an existing node, hangs a new child off the
//! deepest node whose prefix it fully covers, or splits the node where it diverges.

use log::{debug, log_enabled, trace, Level};

use crate::error::{Result, TreeError};
use crate::keys::Key;
use crate::node::{Leaf, Node};
use crate::partials::vector_partial::hex_str;
use crate::partials::VectorPartial;
use crate::stats::{finish_tree_stats, update_tree_stats, TreeStats, TreeStatsTrait};

/// A radix tree mapping byte-string keys to values of type `V`.
///
/// The root always exists and has an empty prefix. Every other node holds a non-empty run of
/// key bytes; children of a node are ordered by the first byte of their prefix and no two
/// share it.
///
/// ```rust
/// use holdtree::RadixTree;
///
/// let mut tree = RadixTree::new();
/// assert_eq!(tree.insert("foobar", 1), Ok(None));
/// assert_eq!(tree.insert("foobaz", 2), Ok(None));
///
/// // Both keys now hang off a shared "fooba" node.
/// let split = tree.root().seek_child(b'f').unwrap();
/// assert_eq!(split.prefix(), b"fooba");
/// assert_eq!(split.edges().labels(), b"rz");
///
/// // Re-inserting a key hands back the value it replaced.
/// assert_eq!(tree.insert("foobar", 3), Ok(Some(1)));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixTree<V> {
    root: Node<V>,
    num_values: usize,
}

/// The nodes matched by a key, from the root down to the deepest one reached.
///
/// Stored as the edge positions taken at each level so the same walk can be replayed
/// mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalPath {
    positions: Vec<usize>,
    matched: usize,
}

impl TraversalPath {
    /// Positions, within each visited node's edges, of the edge followed out of it.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of key bytes covered by the nodes before the last one.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Number of nodes on the path, root included. Never zero.
    pub fn num_nodes(&self) -> usize {
        self.positions.len() + 1
    }

    pub fn nodes<'a, V>(&self, root: &'a Node<V>) -> Vec<&'a Node<V>> {
        let mut nodes = Vec::with_capacity(self.num_nodes());
        let mut node = root;
        nodes.push(node);
        for &pos in &self.positions {
            let Some(edge) = node.edges().get(pos) else {
                break;
            };
            node = edge.child();
            nodes.push(node);
        }
        nodes
    }
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RadixTree<V> {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            num_values: 0,
        }
    }

    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.num_values
    }

    pub fn is_empty(&self) -> bool {
        self.num_values == 0
    }

    /// Insert a key-value pair.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(old_value))` if the key was already present and its value was replaced
    /// - `Ok(None)` if this was a new key
    /// - `Err(TreeError::EmptyKey)` for a zero-length key; the tree is left untouched
    pub fn insert<K: Key + ?Sized>(&mut self, key: &K, value: V) -> Result<Option<V>> {
        let key = key.as_slice();
        if key.is_empty() {
            return Err(TreeError::EmptyKey);
        }

        let path = self.longest_path(key);
        let replaced = Self::insert_at(&mut self.root, &path, key, value);
        if replaced.is_none() {
            self.num_values += 1;
        }
        Ok(replaced)
    }

    fn insert_at(root: &mut Node<V>, path: &TraversalPath, key: &[u8], value: V) -> Option<V> {
        let new_leaf = Leaf::new(key, value);

        // Nothing under the root starts with this key's first byte.
        if path.positions.is_empty() {
            trace!("insert {}: new edge at root", hex_str(key));
            root.add_child(Node::new_leaf(VectorPartial::from_slice(key), new_leaf));
            return None;
        }

        let mut farthest = root;
        for &pos in &path.positions {
            farthest = farthest.edges.child_at_mut(pos);
        }

        let remaining = &key[path.matched..];
        if remaining == farthest.prefix() {
            trace!("insert {}: update existing leaf", hex_str(key));
            return farthest.set_leaf(new_leaf).map(Leaf::into_value);
        }

        let common = farthest.prefix.prefix_length_slice(remaining);
        debug_assert!(common > 0, "edge label must match the key");
        let leaf_suffix = &remaining[common..];

        // The key runs through all of `farthest` and continues past it.
        if common == farthest.prefix.len() {
            trace!(
                "insert {}: extend below {}",
                hex_str(key),
                hex_str(farthest.prefix())
            );
            farthest.add_child(Node::new_leaf(leaf_suffix.into(), new_leaf));
            return None;
        }

        // The key leaves `farthest`'s prefix part way through. Shorten it to the shared bytes
        // and hang the old remainder and the new key below.
        trace!(
            "insert {}: split {} after {} bytes",
            hex_str(key),
            hex_str(farthest.prefix()),
            common
        );
        farthest.split_prefix(common);
        if leaf_suffix.is_empty() {
            farthest.set_leaf(new_leaf);
        } else {
            farthest.add_child(Node::new_leaf(leaf_suffix.into(), new_leaf));
        }
        None
    }

    /// Walks from the root as far as the key's bytes match node prefixes.
    ///
    /// Each step follows the edge labelled with the next unmatched byte and consumes the
    /// child's whole prefix. A child whose prefix the key does not fully cover is still
    /// included, as the last node, since that is where an insert has to split.
    pub fn longest_path<K: Key + ?Sized>(&self, key: &K) -> TraversalPath {
        let mut remaining = key.as_slice();
        let mut node = &self.root;
        let mut positions = Vec::new();
        let mut matched = 0;

        while let Some(&first) = remaining.first() {
            let (Some(edge), idx) = node.edges().find_edge(first) else {
                break;
            };
            positions.push(idx);
            matched += node.prefix.len();
            node = edge.child();

            let Some(rest) = remaining.strip_prefix(node.prefix()) else {
                break;
            };
            remaining = rest;
        }

        TraversalPath { positions, matched }
    }

    pub fn print_tree(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!("tree with {} values", self.num_values);
        Self::print_tree_recurse(&self.root, 0);
    }

    fn print_tree_recurse(node: &Node<V>, depth: usize) {
        let indent = "  ".repeat(depth);
        debug!(
            "{}prefix {}, {}, {} #children",
            indent,
            hex_str(node.prefix()),
            if node.is_leaf() { "leaf" } else { "inner" },
            node.num_children()
        );

        for edge in node.edges() {
            debug!("{}  ({:02x}) =>", indent, edge.label());
            Self::print_tree_recurse(edge.child(), depth + 1);
        }
    }

    fn get_tree_stats_recurse(node: &Node<V>, tree_stats: &mut TreeStats, height: usize) {
        update_tree_stats(tree_stats, node, height);
        for edge in node.edges() {
            Self::get_tree_stats_recurse(edge.child(), tree_stats, height + 1);
        }
    }
}

impl<V> TreeStatsTrait for RadixTree<V> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        Self::get_tree_stats_recurse(&self.root, &mut stats, 1);
        finish_tree_stats(&mut stats);
        stats
    }
}
