//! Failures returned by [`BiMap`](crate::BiMap) operations.
//!
//! All four are caller-recoverable. A failed operation leaves the map exactly
//! as it was before the call.

use thiserror::Error;

/// Error returned when an operation would break the one-to-one mapping, or
/// when a deletion names an entry that is not there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BiMapError {
    /// The key is already mapped to some value.
    #[error("bimap can't have duplicate key")]
    DuplicateKey,
    /// The value is already mapped from some key.
    #[error("bimap can't have duplicate value")]
    DuplicateValue,
    /// `delete` was given a key that is not present.
    #[error("key does not exist in bimap")]
    KeyNotFound,
    /// `delete_value` was given a value that is not present.
    #[error("value does not exist in bimap")]
    ValueNotFound,
}
