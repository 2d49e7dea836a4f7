#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use holdtree::{Node, RadixTree, TreeError};

#[derive(Arbitrary, Debug)]
enum MapMethod {
    Insert { key: Vec<u8>, val: usize },
    // Narrow keys so inserts land on shared prefixes.
    InsertShort { key: [u8; 3], len: u8, val: usize },
}

fn collect(node: &Node<usize>, path: &mut Vec<u8>, out: &mut BTreeMap<Vec<u8>, usize>) {
    let depth = path.len();
    path.extend_from_slice(node.prefix());
    if let Some(leaf) = node.leaf() {
        assert_eq!(leaf.key(), &path[..]);
        out.insert(path.clone(), *leaf.value());
    }
    let labels = node.edges().labels();
    assert!(labels.windows(2).all(|w| w[0] < w[1]));
    for edge in node.edges() {
        assert_eq!(Some(&edge.label()), edge.child().prefix().first());
        collect(edge.child(), path, out);
    }
    path.truncate(depth);
}

fuzz_target!(|methods: Vec<MapMethod>| {
    let mut tree = RadixTree::<usize>::new();
    let mut bt_map = BTreeMap::<Vec<u8>, usize>::new();

    for m in methods {
        let (key, val) = match m {
            MapMethod::Insert { key, val } => (key, val),
            MapMethod::InsertShort { key, len, val } => {
                let len = (len as usize % key.len()) + 1;
                (key[..len].iter().map(|b| b % 4).collect(), val)
            }
        };

        let result = tree.insert(&key, val);
        if key.is_empty() {
            assert_eq!(result, Err(TreeError::EmptyKey));
            continue;
        }
        let btree_insert = bt_map.insert(key, val);
        assert_eq!(result, Ok(btree_insert));
    }

    let mut found = BTreeMap::new();
    collect(tree.root(), &mut Vec::new(), &mut found);
    assert_eq!(found, bt_map);
    assert_eq!(tree.len(), bt_map.len());
});
