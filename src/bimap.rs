// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bidirectional map itself.
//!
//! Three containers move together on every mutation:
//!
//! ```text
//!   forward: HashMap<K, V>     reverse: HashMap<V, K>     order: [K]
//!   ┌─────┬─────┐             ┌─────┬─────┐             ┌───┬───┬───┐
//!   │ "a" │  1  │◀──────────▶ │  1  │ "a" │             │"a"│"c"│"b"│
//!   │ "b" │  2  │◀──────────▶ │  2  │ "b" │             └───┴───┴───┘
//!   │ "c" │  3  │◀──────────▶ │  3  │ "c" │              insertion order
//!   └─────┴─────┘             └─────┴─────┘
//! ```
//!
//! Every mutation validates first and writes second, so a rejected call
//! leaves all three containers untouched. In debug builds the
//! [contracts](crate::verify::contracts) check the touched pair and the
//! three lengths after each successful write, and walk the whole map once
//! after `from_pairs`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::slice;

use crate::error::BiMapError;
use crate::order::KeyOrder;
use crate::verify::contracts::{
    check_last_pair_linked, check_pair_unlinked, check_sizes_agree, check_well_formed,
};

/// A one-to-one map between `K` and `V` that remembers insertion order.
///
/// Lookups are O(1) expected in both directions. Keys and values are both
/// unique: inserting a key or a value that is already present fails with
/// [`BiMapError`] and changes nothing. There is no in-place update; to remap
/// a key, [`delete`](Self::delete) it and [`set`](Self::set) it again.
///
/// `BiMap` does no internal locking. To share one across threads, put it
/// behind a lock that serializes every read and write.
///
/// # Example
///
/// ```
/// use ordbimap::BiMap;
///
/// let mut ports = BiMap::from_pairs([("http", 80), ("https", 443)])?;
/// ports.set("ssh", 22)?;
///
/// assert_eq!(ports.get("https"), Some(&443));
/// assert_eq!(ports.get_key(&22), Some(&"ssh"));
/// assert_eq!(ports.keys(), &["http", "https", "ssh"]);
/// # Ok::<(), ordbimap::BiMapError>(())
/// ```
#[derive(Clone)]
pub struct BiMap<K, V> {
    pub(crate) forward: HashMap<K, V>,
    pub(crate) reverse: HashMap<V, K>,
    pub(crate) order: KeyOrder<K>,
}

impl<K, V> Default for BiMap<K, V> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
            order: KeyOrder::default(),
        }
    }
}

impl<K, V> BiMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` pairs before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            reverse: HashMap::with_capacity(capacity),
            order: KeyOrder::with_capacity(capacity),
        }
    }

    /// Number of pairs in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Number of pairs in the map. Same as [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The key → value index. Iteration order is unspecified.
    #[inline]
    pub fn left(&self) -> &HashMap<K, V> {
        &self.forward
    }

    /// The value → key index. Iteration order is unspecified.
    #[inline]
    pub fn right(&self) -> &HashMap<V, K> {
        &self.reverse
    }

    /// All keys, in the order they were inserted.
    #[inline]
    pub fn keys(&self) -> &[K] {
        self.order.as_slice()
    }

    /// Remove every pair.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
        self.order.clear();

        check_sizes_agree(self);
        log::trace!("bimap: cleared");
    }
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Build a map from pairs, in order.
    ///
    /// Fails with [`BiMapError::DuplicateKey`] or
    /// [`BiMapError::DuplicateValue`] at the first pair that repeats a key
    /// or a value seen earlier in the input. The key is checked first.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, BiMapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut map = Self::with_capacity(pairs.size_hint().0);

        for (key, value) in pairs {
            map.check_vacant(&key, &value)?;
            map.insert_unchecked(key, value);
        }

        check_well_formed(&map);
        log::trace!("bimap: built from {} pairs", map.len());
        Ok(map)
    }

    /// Insert a new pair.
    ///
    /// Both sides must be new to the map. When the key is already present
    /// the result is [`BiMapError::DuplicateKey`], even if the value is a
    /// duplicate as well.
    pub fn set(&mut self, key: K, value: V) -> Result<(), BiMapError> {
        self.check_vacant(&key, &value)?;
        self.insert_unchecked(key, value);

        check_last_pair_linked(self);
        log::trace!("bimap: set pair, {} entries", self.len());
        Ok(())
    }

    fn check_vacant(&self, key: &K, value: &V) -> Result<(), BiMapError> {
        if self.forward.contains_key(key) {
            return Err(BiMapError::DuplicateKey);
        }
        if self.reverse.contains_key(value) {
            return Err(BiMapError::DuplicateValue);
        }
        Ok(())
    }

    /// Caller has already run `check_vacant` for this pair.
    fn insert_unchecked(&mut self, key: K, value: V) {
        self.forward.insert(key.clone(), value.clone());
        self.reverse.insert(value, key.clone());
        self.order.push(key);
    }
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    /// Value paired with `key`, if any.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(key)
    }

    /// Key paired with `value`, if any.
    #[inline]
    pub fn get_key<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.get(value)
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(key)
    }

    #[inline]
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.contains_key(value)
    }

    /// Remove the pair whose key is `key` and hand it back.
    ///
    /// The key is excised from the insertion order; the remaining keys keep
    /// their relative order.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<(K, V), BiMapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (key, value) = self
            .forward
            .remove_entry(key)
            .ok_or(BiMapError::KeyNotFound)?;
        self.reverse.remove(&value);
        self.order.excise(&key);

        check_pair_unlinked(self, &key, &value);
        log::trace!("bimap: deleted by key, {} entries", self.len());
        Ok((key, value))
    }

    /// Remove the pair whose value is `value` and hand it back.
    pub fn delete_value<Q>(&mut self, value: &Q) -> Result<(K, V), BiMapError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (value, key) = self
            .reverse
            .remove_entry(value)
            .ok_or(BiMapError::ValueNotFound)?;
        self.forward.remove(&key);
        self.order.excise(&key);

        check_pair_unlinked(self, &key, &value);
        log::trace!("bimap: deleted by value, {} entries", self.len());
        Ok((key, value))
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            keys: self.order.iter(),
            forward: &self.forward,
        }
    }

    /// Values listed in the insertion order of their keys.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Content equality: same pairs, regardless of insertion order.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.forward == other.forward && self.reverse == other.reverse
    }
}

/// Iterator over `(&K, &V)` in insertion order, from [`BiMap::iter`].
pub struct Iter<'a, K, V> {
    keys: slice::Iter<'a, K>,
    forward: &'a HashMap<K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let forward = self.forward;
        self.keys
            .by_ref()
            .find_map(|key| forward.get(key).map(|value| (key, value)))
    }

    // Exact while the order and the forward index agree, which every
    // public mutation maintains.
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> PartialEq for BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<K, V> Eq for BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
}

impl<K, V> fmt::Debug for BiMap<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> TryFrom<Vec<(K, V)>> for BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    type Error = BiMapError;

    fn try_from(pairs: Vec<(K, V)>) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}

impl<K, V, const N: usize> TryFrom<[(K, V); N]> for BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    type Error = BiMapError;

    fn try_from(pairs: [(K, V); N]) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}
