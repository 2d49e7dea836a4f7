mod common;

use std::collections::BTreeMap;

use proptest::prelude::*;

use holdtree::{RadixTree, TreeError, TreeStatsTrait};

use common::{assert_compressed, collect_checked};

// Small alphabets make shared prefixes, and so splits, common.
fn arb_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        proptest::collection::vec(b'a'..=b'c', 1..8),
        proptest::collection::vec(any::<u8>(), 1..6),
    ]
}

fn arb_entries() -> impl Strategy<Value = Vec<(Vec<u8>, u32)>> {
    proptest::collection::vec((arb_key(), any::<u32>()), 0..64)
}

proptest! {
    #[test]
    fn matches_btreemap(entries in arb_entries()) {
        let mut tree = RadixTree::new();
        let mut model = BTreeMap::new();
        for (key, value) in &entries {
            let replaced = tree.insert(key, *value);
            prop_assert_eq!(replaced, Ok(model.insert(key.clone(), *value)));
        }
        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(collect_checked(&tree), model);
        assert_compressed(&tree);
    }

    #[test]
    fn shape_independent_of_update_values(entries in arb_entries()) {
        let mut tree = RadixTree::new();
        for (key, value) in &entries {
            tree.insert(key, *value).unwrap();
        }
        let before = tree.get_tree_stats();

        // Re-inserting every key only swaps values.
        for (key, value) in &entries {
            prop_assert!(tree.insert(key, value.wrapping_add(1)).unwrap().is_some());
        }
        prop_assert_eq!(tree.get_tree_stats(), before);
    }

    #[test]
    fn shape_independent_of_insert_order(entries in arb_entries()) {
        let mut forward = RadixTree::new();
        let mut backward = RadixTree::new();
        let mut dedup = BTreeMap::new();
        for (key, value) in &entries {
            dedup.insert(key.clone(), *value);
        }
        for (key, value) in dedup.iter() {
            forward.insert(key, *value).unwrap();
        }
        for (key, value) in dedup.iter().rev() {
            backward.insert(key, *value).unwrap();
        }
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn longest_path_reaches_inserted_key(entries in arb_entries()) {
        let mut tree = RadixTree::new();
        for (key, value) in &entries {
            tree.insert(key, *value).unwrap();
        }
        for (key, _) in &entries {
            let path = tree.longest_path(key);
            let nodes = path.nodes(tree.root());
            prop_assert_eq!(nodes.len(), path.num_nodes());
            let last = nodes[nodes.len() - 1];
            prop_assert_eq!(last.leaf().map(|l| l.key()), Some(&key[..]));
            prop_assert_eq!(path.matched() + last.prefix().len(), key.len());
        }
    }

    #[test]
    fn empty_key_never_changes_tree(entries in arb_entries()) {
        let mut tree = RadixTree::new();
        for (key, value) in &entries {
            tree.insert(key, *value).unwrap();
        }
        let before = tree.clone();
        prop_assert_eq!(tree.insert(&Vec::<u8>::new(), 0), Err(TreeError::EmptyKey));
        prop_assert_eq!(tree, before);
    }
}
