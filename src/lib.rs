//! # holdtree
//!
//! A path-compressed radix tree over byte-string keys, meant as the in-memory index of a
//! key-value store.
//!
//! Each node carries the run of key bytes that leads to it from its parent, so chains of
//! single-child nodes never exist: when two keys diverge inside a run, the node holding it is
//! split at the divergence point. Children are kept sorted by the first byte of their run.
//!
//! This crate implements insertion and exposes the node/edge structure read-only, so lookup,
//! deletion and iteration can be layered on the same model.
//!
//! ```rust
//! use holdtree::{RadixTree, TreeStatsTrait};
//!
//! let mut tree = RadixTree::new();
//! tree.insert("romane", 1)?;
//! tree.insert("romanus", 2)?;
//! tree.insert("romulus", 3)?;
//!
//! let rom = tree.root().seek_child(b'r').unwrap();
//! assert_eq!(rom.prefix(), b"rom");
//! assert_eq!(rom.edges().labels(), b"au");
//! assert_eq!(tree.get_tree_stats().num_values, 3);
//! # Ok::<(), holdtree::TreeError>(())
//! ```

pub mod error;
pub mod keys;
pub mod mapping;
mod node;
pub mod partials;
pub mod stats;
pub mod tree;

pub use error::{Result, TreeError};
pub use keys::{Key, SliceKey, VectorKey};
pub use mapping::{Edge, Edges};
pub use node::{Leaf, Node};
pub use stats::{TreeStats, TreeStatsTrait};
pub use tree::{RadixTree, TraversalPath};
