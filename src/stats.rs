//! Structural statistics for a tree.
//!
//! Useful for checking how well keys compress: a tree where most nodes have one child or
//! carry long prefixes behaves very differently from a bushy one.

use std::collections::BTreeMap;

use crate::node::Node;

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TreeStats {
    /// Number of nodes with a given number of children.
    pub fanout_histogram: BTreeMap<usize, usize>,
    pub num_nodes: usize,
    /// Nodes holding no leaf, the root included.
    pub num_inner_nodes: usize,
    pub num_values: usize,
    pub num_edges: usize,
    pub max_fanout: usize,
    pub max_height: usize,
    pub total_prefix_bytes: usize,
    pub avg_fanout: f64,
}

pub(crate) fn update_tree_stats<V>(tree_stats: &mut TreeStats, node: &Node<V>, height: usize) {
    let num_children = node.num_children();

    tree_stats.num_nodes += 1;
    if node.is_leaf() {
        tree_stats.num_values += 1;
    } else {
        tree_stats.num_inner_nodes += 1;
    }
    tree_stats.num_edges += num_children;
    tree_stats.total_prefix_bytes += node.prefix().len();
    tree_stats.max_fanout = tree_stats.max_fanout.max(num_children);
    tree_stats.max_height = tree_stats.max_height.max(height);
    tree_stats
        .fanout_histogram
        .entry(num_children)
        .and_modify(|e| *e += 1)
        .or_insert(1);
}

pub(crate) fn finish_tree_stats(tree_stats: &mut TreeStats) {
    let parents = tree_stats
        .fanout_histogram
        .iter()
        .filter(|(fanout, _)| **fanout > 0)
        .map(|(_, count)| count)
        .sum::<usize>();
    if parents > 0 {
        tree_stats.avg_fanout = tree_stats.num_edges as f64 / parents as f64;
    }
}
