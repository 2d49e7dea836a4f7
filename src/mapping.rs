//! Per-node edge directory.
//!
//! Children are kept in a vector sorted by their edge label, the first byte of the child's
//! prefix. No two children of a node share a first byte, so a single byte comparison is enough
//! to both order and find them: lookups are a binary search, and inserts shift the tail of the
//! vector to the right to open a slot at the sorted position.

use std::slice::Iter;

/// A labelled, owning link from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N> {
    pub(crate) label: u8,
    pub(crate) child: N,
}

impl<N> Edge<N> {
    pub fn new(label: u8, child: N) -> Self {
        Self { label, child }
    }

    #[inline]
    pub fn label(&self) -> u8 {
        self.label
    }

    #[inline]
    pub fn child(&self) -> &N {
        &self.child
    }

    #[inline]
    pub(crate) fn child_mut(&mut self) -> &mut N {
        &mut self.child
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edges<N> {
    edges: Vec<Edge<N>>,
}

impl<N> Default for Edges<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Edges<N> {
    #[inline]
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Looks up the edge labelled `label`.
    ///
    /// Also returns the position the label occupies, or would occupy if it were inserted.
    #[inline]
    pub fn find_edge(&self, label: u8) -> (Option<&Edge<N>>, usize) {
        match self.search(label) {
            Ok(idx) => (Some(&self.edges[idx]), idx),
            Err(idx) => (None, idx),
        }
    }

    #[inline]
    pub fn find_edge_mut(&mut self, label: u8) -> (Option<&mut Edge<N>>, usize) {
        match self.search(label) {
            Ok(idx) => (Some(&mut self.edges[idx]), idx),
            Err(idx) => (None, idx),
        }
    }

    pub fn seek_child(&self, label: u8) -> Option<&N> {
        self.find_edge(label).0.map(Edge::child)
    }

    /// Splices `edge` in at its sorted position.
    ///
    /// The label must not already be present; replacing a child is done through
    /// [`Edges::get_mut`], never by inserting over it.
    pub fn insert_edge(&mut self, edge: Edge<N>) {
        let (existing, idx) = self.find_edge(edge.label);
        debug_assert!(
            existing.is_none(),
            "edge label {:02x} already present",
            edge.label
        );
        self.edges.insert(idx, edge);
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<&Edge<N>> {
        self.edges.get(position)
    }

    /// Child at `position`, which must come from a lookup on this same, unmodified directory.
    #[inline]
    pub(crate) fn child_at_mut(&mut self, position: usize) -> &mut N {
        self.edges[position].child_mut()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Edge<N>> {
        self.edges.iter()
    }

    pub fn labels(&self) -> Vec<u8> {
        self.edges.iter().map(Edge::label).collect()
    }

    #[inline]
    fn search(&self, label: u8) -> Result<usize, usize> {
        self.edges.binary_search_by_key(&label, Edge::label)
    }
}

impl<'a, N> IntoIterator for &'a Edges<N> {
    type Item = &'a Edge<N>;
    type IntoIter = Iter<'a, Edge<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N> FromIterator<Edge<N>> for Edges<N> {
    fn from_iter<T: IntoIterator<Item = Edge<N>>>(iter: T) -> Self {
        let mut edges = Edges::new();
        for edge in iter {
            edges.insert_edge(edge);
        }
        edges
    }
}
