//! Shared test utilities and fixtures.

#![allow(dead_code)]

use ordbimap::testing::Token;
use ordbimap::{token_pairs, BiMap, BiMapError};
use std::collections::HashMap;
use std::hash::Hash;

// ============================================================================
// FIXTURES
// ============================================================================

/// The mixed-kind map used throughout: `"a" → 1`, `"b" → 2`, `true → false`.
pub fn mixed_map() -> BiMap<Token, Token> {
    BiMap::from_pairs(token_pairs![("a", 1), ("b", 2), (true, false)])
        .expect("fixture pairs are distinct")
}

/// A map built by inserting `pairs` one at a time through `set`.
pub fn map_by_insertion<K, V>(pairs: &[(K, V)]) -> BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    let mut map = BiMap::new();
    for (key, value) in pairs {
        map.set(key.clone(), value.clone())
            .expect("fixture pairs are distinct");
    }
    map
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that every invariant holds and that the views agree with each other.
pub fn assert_well_formed<K, V>(map: &BiMap<K, V>)
where
    K: Eq + Hash + std::fmt::Debug,
    V: Eq + Hash + std::fmt::Debug,
{
    if let Err(violation) = map.verify() {
        panic!("invariant violated: {}\nmap: {:?}", violation, map);
    }

    assert_eq!(map.size(), map.left().len());
    assert_eq!(map.size(), map.right().len());
    assert_eq!(map.size(), map.keys().len());
    assert_eq!(map.size(), map.values().len());

    for (key, value) in map.left() {
        assert_eq!(map.right().get(value), Some(key), "reverse index disagrees");
    }
}

// ============================================================================
// REFERENCE MODEL
// ============================================================================

/// A deliberately naive bimap: one `Vec` of pairs, linear scans everywhere.
///
/// Property tests replay the same operations on this and on `BiMap` and
/// compare the two after every step.
#[derive(Debug, Clone, Default)]
pub struct Model<K, V> {
    pub pairs: Vec<(K, V)>,
}

impl<K: PartialEq + Clone, V: PartialEq + Clone> Model<K, V> {
    pub fn set(&mut self, key: K, value: V) -> Result<(), BiMapError> {
        if self.pairs.iter().any(|(k, _)| *k == key) {
            return Err(BiMapError::DuplicateKey);
        }
        if self.pairs.iter().any(|(_, v)| *v == value) {
            return Err(BiMapError::DuplicateValue);
        }
        self.pairs.push((key, value));
        Ok(())
    }

    pub fn delete(&mut self, key: &K) -> Result<(K, V), BiMapError> {
        let position = self
            .pairs
            .iter()
            .position(|(k, _)| k == key)
            .ok_or(BiMapError::KeyNotFound)?;
        Ok(self.pairs.remove(position))
    }

    pub fn delete_value(&mut self, value: &V) -> Result<(K, V), BiMapError> {
        let position = self
            .pairs
            .iter()
            .position(|(_, v)| v == value)
            .ok_or(BiMapError::ValueNotFound)?;
        Ok(self.pairs.remove(position))
    }

    pub fn keys(&self) -> Vec<K> {
        self.pairs.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn values(&self) -> Vec<V> {
        self.pairs.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Model<K, V> {
    pub fn as_hash_map(&self) -> HashMap<K, V> {
        self.pairs.iter().cloned().collect()
    }
}
