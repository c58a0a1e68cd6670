// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant checking for [`BiMap`].
//!
//! `verify` is the one place that knows what a well-formed map looks like.
//! The debug contracts assert the same invariants piecemeal; the property
//! tests call it after every step of a random operation sequence.
//!
//! # Why these checks are sufficient
//!
//! Walking `order` proves that every ordered key is distinct, present in
//! `forward`, and mapped back to itself by `reverse`. Two keys sharing a
//! value cannot both map back, so I3 falls out of the same walk. Once the
//! three lengths agree, `order` covers `forward` and `reverse` holds nothing
//! but those inverses.

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

use crate::BiMap;

/// Error type for invariant violations.
///
/// Positions index into insertion order ([`BiMap::keys`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The key at `position` in insertion order has no forward entry.
    #[error("order[{position}] is not a key of the forward index")]
    StaleOrderEntry { position: usize },
    /// The key at `position` already appeared earlier in insertion order.
    #[error("order[{position}] repeats an earlier key")]
    DuplicateOrderEntry { position: usize },
    /// The value of the key at `position` does not map back to that key.
    #[error("reverse index does not map the value of order[{position}] back to its key")]
    MissingInverse { position: usize },
    /// The three containers disagree on the number of pairs.
    #[error("forward.len() {forward}, reverse.len() {reverse}, order.len() {order} differ")]
    LengthMismatch {
        forward: usize,
        reverse: usize,
        order: usize,
    },
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    /// Check I1–I4, returning the first violation found.
    ///
    /// Never fails on a map that was only touched through its public API.
    pub fn verify(&self) -> Result<(), InvariantError> {
        let mut seen: HashSet<&K> = HashSet::with_capacity(self.order.len());

        for (position, key) in self.order.iter().enumerate() {
            if !seen.insert(key) {
                return Err(InvariantError::DuplicateOrderEntry { position });
            }
            let Some(value) = self.forward.get(key) else {
                return Err(InvariantError::StaleOrderEntry { position });
            };
            if self.reverse.get(value) != Some(key) {
                return Err(InvariantError::MissingInverse { position });
            }
        }

        let (forward, reverse, order) = (self.forward.len(), self.reverse.len(), self.order.len());
        if forward != order || reverse != order {
            return Err(InvariantError::LengthMismatch {
                forward,
                reverse,
                order,
            });
        }

        Ok(())
    }
}
