// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for [`BiMap`] mutations.
//!
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (the walks are skipped entirely)
//! 2. Provide **early failure detection** during development
//! 3. Check the same invariants as [`BiMap::verify`]
//!
//! Per-mutation contracts only look at the pair that was touched, so `set`
//! and `delete` stay O(1) in debug builds. The full walks run once, at the
//! end of `from_pairs`.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function         | Invariant                        | Cost |
//! |---------------------------|----------------------------------|------|
//! | `check_last_pair_linked`  | I1, I2 for the inserted pair     | O(1) |
//! | `check_pair_unlinked`     | I1 for a removed pair            | O(1) |
//! | `check_sizes_agree`       | I4: all three lengths equal      | O(1) |
//! | `check_indexes_inverse`   | I1, I3: forward ⟷ reverse        | O(n) |
//! | `check_order_complete`    | I2: order ≡ keys of forward      | O(n) |
//! | `check_well_formed`       | all full walks                   | O(n) |

use std::hash::Hash;

use crate::BiMap;

// ============================================================================
// PER-MUTATION CONTRACTS
// ============================================================================

/// Check that the most recently inserted pair is linked both ways.
///
/// The pair is read back from the end of the insertion order.
///
/// # Panics (debug builds only)
/// Panics if the order is empty or either index misses the pair.
#[inline]
pub fn check_last_pair_linked<K, V>(map: &BiMap<K, V>)
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    if !cfg!(debug_assertions) {
        return;
    }

    let linked = map.order.as_slice().last().is_some_and(|key| {
        map.forward
            .get(key)
            .is_some_and(|value| map.reverse.get(value) == Some(key))
    });
    debug_assert!(
        linked,
        "Contract violation: BiMap.PairLinked - last inserted pair is not linked in both indexes"
    );
    check_sizes_agree(map);
}

/// Check that a just-removed pair is gone from both indexes.
///
/// # Panics (debug builds only)
/// Panics if either side of the pair is still present.
#[inline]
pub fn check_pair_unlinked<K, V>(map: &BiMap<K, V>, key: &K, value: &V)
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    debug_assert!(
        !map.forward.contains_key(key) && !map.reverse.contains_key(value),
        "Contract violation: BiMap.PairUnlinked - removed pair is still indexed"
    );
    check_sizes_agree(map);
}

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that every forward pair has its inverse in the reverse index.
///
/// # Panics (debug builds only)
/// Panics if some `forward[k] == v` has `reverse[v] != k`.
#[inline]
pub fn check_indexes_inverse<K, V>(map: &BiMap<K, V>)
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    if !cfg!(debug_assertions) {
        return;
    }

    let dangling = map
        .forward
        .iter()
        .filter(|&(key, value)| map.reverse.get(value) != Some(key))
        .count();

    debug_assert!(
        dangling == 0,
        "Contract violation: BiMap.Inverse - {} forward pairs have no matching reverse entry",
        dangling
    );
}

// ============================================================================
// ORDER CONTRACTS
// ============================================================================

/// Check that the insertion order lists exactly the forward keys, once each.
///
/// # Panics (debug builds only)
/// Panics on a stale or repeated order entry.
#[inline]
pub fn check_order_complete<K, V>(map: &BiMap<K, V>)
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    if !cfg!(debug_assertions) {
        return;
    }

    let mut seen = std::collections::HashSet::with_capacity(map.order.len());
    for (position, key) in map.order.iter().enumerate() {
        debug_assert!(
            map.forward.contains_key(key),
            "Contract violation: BiMap.OrderComplete - order[{}] is not a present key",
            position
        );
        let first_occurrence = seen.insert(key);
        debug_assert!(
            first_occurrence,
            "Contract violation: BiMap.OrderComplete - order[{}] repeats an earlier key",
            position
        );
    }
}

// ============================================================================
// SIZE CONTRACTS
// ============================================================================

/// Check that forward, reverse and order all hold the same number of entries.
#[inline]
pub fn check_sizes_agree<K, V>(map: &BiMap<K, V>) {
    debug_assert!(
        map.forward.len() == map.reverse.len() && map.reverse.len() == map.order.len(),
        "Contract violation: BiMap.SizesAgree - forward {} / reverse {} / order {}",
        map.forward.len(),
        map.reverse.len(),
        map.order.len()
    );
}

// ============================================================================
// COMBINED
// ============================================================================

/// Run every full walk. Called once at the end of `from_pairs`.
#[inline]
pub fn check_well_formed<K, V>(map: &BiMap<K, V>)
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    check_sizes_agree(map);
    check_indexes_inverse(map);
    check_order_complete(map);
}
