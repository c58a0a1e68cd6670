// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Insertion-order tracking for the keys of a [`BiMap`](crate::BiMap).
//!
//! The hash indexes have no stable iteration order, so the map keeps a
//! separate sequence of keys in the order they were first inserted. Removal
//! is positional: the entry is located, taken out, and everything after it
//! shifts left by one. Nothing is ever truncated.

use std::slice;

/// Ordered sequence of keys, one entry per key currently in the map.
#[derive(Debug, Clone)]
pub(crate) struct KeyOrder<K> {
    keys: Vec<K>,
}

impl<K> Default for KeyOrder<K> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<K> KeyOrder<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Append a key at the end of the order.
    ///
    /// The caller guarantees the key is not already present.
    #[inline]
    pub(crate) fn push(&mut self, key: K) {
        self.keys.push(key);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub(crate) fn iter(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
    }
}

impl<K: PartialEq> KeyOrder<K> {
    /// Position of `key` in insertion order.
    pub(crate) fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|candidate| candidate == key)
    }

    /// Remove `key`, keeping the relative order of every other entry.
    ///
    /// Returns the position the key occupied, or `None` (and no change) when
    /// the key is not in the order.
    pub(crate) fn excise(&mut self, key: &K) -> Option<usize> {
        let position = self.position(key)?;
        self.keys.remove(position);
        Some(position)
    }
}
