use crate::mapping::{Edge, Edges};
use crate::partials::VectorPartial;

/// A key that terminates at a node, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<V> {
    pub(crate) key: Box<[u8]>,
    pub(crate) value: V,
}

impl<V> Leaf<V> {
    pub fn new(key: &[u8], value: V) -> Self {
        Self {
            key: Box::from(key),
            value,
        }
    }

    #[inline]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

/// A tree node: the run of key bytes it compresses, an optional leaf, and its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    pub(crate) prefix: VectorPartial,
    pub(crate) leaf: Option<Leaf<V>>,
    pub(crate) edges: Edges<Node<V>>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self::new_inner(VectorPartial::empty())
    }
}

impl<V> Node<V> {
    #[inline]
    pub(crate) fn new_leaf(prefix: VectorPartial, leaf: Leaf<V>) -> Self {
        Self {
            prefix,
            leaf: Some(leaf),
            edges: Edges::new(),
        }
    }

    #[inline]
    pub(crate) fn new_inner(prefix: VectorPartial) -> Self {
        Self {
            prefix,
            leaf: None,
            edges: Edges::new(),
        }
    }

    #[inline]
    pub fn prefix(&self) -> &[u8] {
        self.prefix.to_slice()
    }

    #[inline]
    pub fn leaf(&self) -> Option<&Leaf<V>> {
        self.leaf.as_ref()
    }

    pub fn value(&self) -> Option<&V> {
        self.leaf.as_ref().map(Leaf::value)
    }

    #[inline]
    pub fn edges(&self) -> &Edges<Node<V>> {
        &self.edges
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    pub fn num_children(&self) -> usize {
        self.edges.len()
    }

    pub fn seek_child(&self, label: u8) -> Option<&Node<V>> {
        self.edges.seek_child(label)
    }

    /// Attaches `child` under the label given by the first byte of its prefix.
    pub(crate) fn add_child(&mut self, child: Node<V>) {
        debug_assert!(!child.prefix.is_empty(), "child nodes need a prefix");
        self.edges.insert_edge(Edge::new(child.prefix.at(0), child));
    }

    /// Stores `leaf` here, handing back whatever leaf was here before.
    pub(crate) fn set_leaf(&mut self, leaf: Leaf<V>) -> Option<Leaf<V>> {
        self.leaf.replace(leaf)
    }

    /// Splits this node's prefix after `at` bytes.
    ///
    /// `self` keeps the first `at` bytes and loses its leaf and edges; those move, untouched,
    /// to a new sole child holding the rest of the prefix. `at` must fall strictly inside the
    /// prefix so both halves are non-empty.
    pub(crate) fn split_prefix(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.prefix.len());
        let shared = self.prefix.partial_before(at);
        let mut demoted = std::mem::replace(self, Node::new_inner(shared));
        demoted.prefix = demoted.prefix.partial_after(at);
        self.add_child(demoted);
    }
}
