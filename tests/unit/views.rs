//! `left`, `right`, `keys`, `values` and `iter`.

use super::common::map_by_insertion;
use ordbimap::testing::{tok, Token};
use ordbimap::token_pairs;
use std::collections::HashMap;

fn four() -> ordbimap::BiMap<Token, Token> {
    map_by_insertion(&token_pairs![("a", 1), ("b", 2), ("c", 3), (true, false)])
}

#[test]
fn left_is_the_key_to_value_mapping() {
    let expected: HashMap<Token, Token> = token_pairs![("a", 1), ("b", 2), ("c", 3), (true, false)]
        .into_iter()
        .collect();
    assert_eq!(four().left(), &expected);
}

#[test]
fn right_is_the_value_to_key_mapping() {
    let expected: HashMap<Token, Token> = token_pairs![(1, "a"), (2, "b"), (3, "c"), (false, true)]
        .into_iter()
        .collect();
    assert_eq!(four().right(), &expected);
}

#[test]
fn keys_follow_insertion_order() {
    assert_eq!(four().keys(), &[tok("a"), tok("b"), tok("c"), tok(true)]);
}

#[test]
fn values_follow_key_order() {
    let values: Vec<Token> = four().values().cloned().collect();
    assert_eq!(values, vec![tok(1), tok(2), tok(3), tok(false)]);
}

#[test]
fn values_are_not_sorted_by_value() {
    let map = map_by_insertion(&[("x", 30), ("y", 10), ("z", 20)]);
    let values: Vec<i32> = map.values().copied().collect();
    assert_eq!(values, vec![30, 10, 20]);
}

#[test]
fn deleting_from_the_middle_closes_the_gap() {
    let mut map = map_by_insertion(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    map.delete("b").unwrap();
    map.delete_value(&4).unwrap();

    assert_eq!(map.keys(), &["a", "c"]);
    let values: Vec<_> = map.values().collect();
    assert_eq!(values, vec![&1, &3]);
}

#[test]
fn iter_pairs_keys_with_values() {
    let map = four();
    for (i, (key, value)) in map.iter().enumerate() {
        assert_eq!(key, &map.keys()[i]);
        assert_eq!(map.get(key), Some(value));
    }

    let mut count = 0;
    for _ in &map {
        count += 1;
    }
    assert_eq!(count, map.size());
}

#[test]
fn cloned_views_do_not_alias_the_map() {
    let mut map = map_by_insertion(&[("a", 1), ("b", 2)]);
    let mut left = map.left().clone();
    let keys = map.keys().to_vec();

    left.insert("z", 26);
    map.delete("a").unwrap();

    assert!(map.get("z").is_none());
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map.keys(), &["b"]);
}
