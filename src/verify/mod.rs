// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: invariant checks for [`BiMap`](crate::BiMap).
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **`BiMap::verify`** walks the three containers and reports the first
//!    broken invariant as an [`InvariantError`]. Callers and tests use it
//!    as an oracle.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are
//!    violated. Every successful mutation runs them. Zero-cost in release.
//!
//! # Invariants
//!
//! | Name | Statement                                                         |
//! |------|-------------------------------------------------------------------|
//! | I1   | `forward` and `reverse` are exact inverses                        |
//! | I2   | `order` holds each key of `forward` exactly once                  |
//! | I3   | no value is shared by two keys                                    |
//! | I4   | `len(forward) == len(reverse) == len(order)`                      |

mod types;
pub mod contracts;

pub use types::*;
