// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for ordbimap's insertion-order tracking.
//!
//! This standalone crate extracts the order excision routine and provides
//! bounded proofs of its correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: excise never panics, present key or not
//! 2. **Exactly one**: a present key is removed once and the length drops by one
//! 3. **Stable order**: entries before the hole stay put, entries after shift left by one
//! 4. **No-op on miss**: an absent key leaves the order untouched

/// Largest order the proofs enumerate.
pub const MAX_ORDER_LEN: usize = 5;

// ============================================================================
// ORDER EXCISION (copied from src/order.rs)
// ============================================================================

/// Position of `key` in insertion order.
pub fn position<K: PartialEq>(keys: &[K], key: &K) -> Option<usize> {
    keys.iter().position(|candidate| candidate == key)
}

/// Remove `key`, keeping the relative order of every other entry.
pub fn excise<K: PartialEq>(keys: &mut Vec<K>, key: &K) -> Option<usize> {
    let position = position(keys, key)?;
    keys.remove(position);
    Some(position)
}

// ============================================================================
// KANI PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic order of distinct keys, length up to MAX_ORDER_LEN.
    fn any_distinct_order() -> Vec<u8> {
        let len: usize = kani::any_where(|&n| n <= MAX_ORDER_LEN);
        let mut keys = Vec::with_capacity(len);
        for _ in 0..len {
            let key: u8 = kani::any();
            kani::assume(!keys.contains(&key));
            keys.push(key);
        }
        keys
    }

    /// Verify that excising a present key removes it exactly once.
    #[kani::proof]
    #[kani::unwind(7)] // MAX_ORDER_LEN + 2
    fn verify_excise_present_removes_once() {
        let original = any_distinct_order();
        kani::assume(!original.is_empty());
        let index: usize = kani::any_where(|&i| i < original.len());
        let key = original[index];

        let mut keys = original.clone();
        let removed_at = excise(&mut keys, &key);

        kani::assert(removed_at == Some(index), "excise must report the key's position");
        kani::assert(keys.len() == original.len() - 1, "length must drop by exactly one");
        kani::assert(!keys.contains(&key), "excised key must be gone");
    }

    /// Verify that surviving entries keep their relative order.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_excise_preserves_relative_order() {
        let original = any_distinct_order();
        kani::assume(!original.is_empty());
        let index: usize = kani::any_where(|&i| i < original.len());
        let key = original[index];

        let mut keys = original.clone();
        excise(&mut keys, &key);

        for i in 0..keys.len() {
            let source = if i < index { i } else { i + 1 };
            kani::assert(keys[i] == original[source], "survivor moved out of order");
        }
    }

    /// Verify that an absent key leaves the order untouched.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_excise_absent_is_noop() {
        let original = any_distinct_order();
        let key: u8 = kani::any();
        kani::assume(!original.contains(&key));

        let mut keys = original.clone();
        let removed_at = excise(&mut keys, &key);

        kani::assert(removed_at.is_none(), "absent key must not be found");
        kani::assert(keys == original, "order must be unchanged");
    }
}

// ============================================================================
// STANDARD TESTS (run with cargo test)
// ============================================================================
