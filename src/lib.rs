//! Insertion-ordered bidirectional map with checked invariants.
//!
//! A [`BiMap`] holds a one-to-one correspondence between keys and values.
//! Either side can be looked up in O(1) expected time, neither side may
//! repeat, and iteration follows the order in which pairs were inserted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  error.rs   │◀────│   bimap.rs   │────▶│  order.rs   │
//! │ (BiMapError)│     │ (BiMap: set, │     │ (KeyOrder:  │
//! │             │     │  get, delete)│     │  excise)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                          │
//! │  (InvariantError, BiMap::verify, O(1) debug         │
//! │   contracts after every successful mutation)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Name | Holds after every operation                               |
//! |------|-----------------------------------------------------------|
//! | I1   | forward and reverse indexes are exact inverses            |
//! | I2   | insertion order lists each present key once               |
//! | I3   | no value is shared by two keys                            |
//! | I4   | `size() == left().len() == right().len() == keys().len()` |
//!
//! # Usage
//!
//! ```
//! use ordbimap::{BiMap, BiMapError};
//!
//! let mut colors = BiMap::from_pairs([("red", 0xff0000), ("green", 0x00ff00)])?;
//! assert_eq!(colors.set("blue", 0xff0000), Err(BiMapError::DuplicateValue));
//!
//! colors.delete("red")?;
//! colors.set("blue", 0x0000ff)?;
//! assert_eq!(colors.keys(), &["green", "blue"]);
//! assert_eq!(colors.get_key(&0x0000ff), Some(&"blue"));
//! # Ok::<(), BiMapError>(())
//! ```
//!
//! A map is statically typed over `K` and `V`. To mix kinds of keys in one
//! map (strings next to booleans, say), use a sum type as `K`.

// Module declarations
mod bimap;
mod error;
mod order;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use bimap::{BiMap, Iter};
pub use error::BiMapError;
pub use verify::InvariantError;
