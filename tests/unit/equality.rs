//! Content equality.

use super::common::map_by_insertion;
use ordbimap::{token_pairs, BiMap};

#[test]
fn same_pairs_are_equal() {
    let first = BiMap::from_pairs(token_pairs![("a", 1), ("b", 2)]).unwrap();
    let second = BiMap::from_pairs(token_pairs![("a", 1), ("b", 2)]).unwrap();
    assert!(first.is_equal(&second));
    assert_eq!(first, second);
}

#[test]
fn different_pairs_are_not_equal() {
    let first = BiMap::from_pairs(token_pairs![("a", 1), ("b", 2)]).unwrap();
    let second = BiMap::from_pairs(token_pairs![("a", 1), ("c", 3)]).unwrap();
    assert!(!first.is_equal(&second));
    assert_ne!(first, second);
}

#[test]
fn insertion_order_is_ignored() {
    let first = map_by_insertion(&[("a", 1), ("b", 2)]);
    let second = map_by_insertion(&[("b", 2), ("a", 1)]);

    assert_ne!(first.keys(), second.keys());
    assert_eq!(first, second);
}

#[test]
fn same_keys_with_swapped_values_are_not_equal() {
    let first = map_by_insertion(&[("a", 1), ("b", 2)]);
    let second = map_by_insertion(&[("a", 2), ("b", 1)]);
    assert_ne!(first, second);
}

#[test]
fn equality_after_delete_and_reinsert() {
    let mut first = map_by_insertion(&[("a", 1), ("b", 2), ("c", 3)]);
    let second = map_by_insertion(&[("c", 3), ("a", 1), ("b", 2)]);

    first.delete("a").unwrap();
    first.set("a", 1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_maps_are_equal() {
    assert_eq!(BiMap::<u8, u8>::new(), BiMap::default());
}
