// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary BiMap operation sequences.
//!
//! Every mutation path has to keep three containers in lockstep. The fuzzer
//! drives random sets and deletes and compares against a linear-scan list
//! of pairs after each one.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ordbimap::{BiMap, BiMapError};

#[derive(Debug, Arbitrary)]
enum Op {
    Set(u8, u8),
    Delete(u8),
    DeleteValue(u8),
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut map: BiMap<u8, u8> = BiMap::new();
    let mut model: Vec<(u8, u8)> = Vec::new();

    for op in &ops {
        match *op {
            Op::Set(k, v) => {
                let expected = if model.iter().any(|&(mk, _)| mk == k) {
                    Err(BiMapError::DuplicateKey)
                } else if model.iter().any(|&(_, mv)| mv == v) {
                    Err(BiMapError::DuplicateValue)
                } else {
                    model.push((k, v));
                    Ok(())
                };
                assert_eq!(map.set(k, v), expected, "set({}, {})", k, v);
            }
            Op::Delete(k) => {
                let expected = match model.iter().position(|&(mk, _)| mk == k) {
                    Some(i) => Ok(model.remove(i)),
                    None => Err(BiMapError::KeyNotFound),
                };
                assert_eq!(map.delete(&k), expected, "delete({})", k);
            }
            Op::DeleteValue(v) => {
                let expected = match model.iter().position(|&(_, mv)| mv == v) {
                    Some(i) => Ok(model.remove(i)),
                    None => Err(BiMapError::ValueNotFound),
                };
                assert_eq!(map.delete_value(&v), expected, "delete_value({})", v);
            }
            Op::Clear => {
                model.clear();
                map.clear();
            }
        }

        // Property 1: all invariants hold after every step
        if let Err(violation) = map.verify() {
            panic!("invariant violated after {:?}: {}", op, violation);
        }

        // Property 2: insertion order matches the model exactly
        let keys: Vec<u8> = model.iter().map(|&(k, _)| k).collect();
        assert_eq!(map.keys(), keys.as_slice());

        // Property 3: values follow key order
        let values: Vec<u8> = map.values().copied().collect();
        let expected: Vec<u8> = model.iter().map(|&(_, v)| v).collect();
        assert_eq!(values, expected);
    }
});
