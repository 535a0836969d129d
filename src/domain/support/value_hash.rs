//! Stable value hashing.
//!
//! `#[derive(Hash)]` is fine for `HashMap` keys but its output depends on the
//! hasher. Model objects additionally expose a hash that is identical across
//! processes and releases: every field is folded into an accumulator seeded
//! with 1 using the odd multiplier 31, absent fields contribute 0, and
//! strings hash over their UTF-16 code units. The result therefore matches
//! the hash codes produced by the service's other reference clients.

use chrono::{DateTime, Utc};

/// A hash that is a pure function of an object's field values.
pub trait ValueHash {
    /// Compute the stable hash of this value
    fn value_hash(&self) -> i32;
}

/// Folds field hashes in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashBuilder {
    hash: i32,
}

impl HashBuilder {
    /// Multiplier applied before each field is added
    pub const PRIME: i32 = 31;

    /// Start a new accumulator (seeded with 1)
    pub fn new() -> Self {
        Self { hash: 1 }
    }

    /// Fold in the next field
    pub fn field<T: ValueHash + ?Sized>(self, value: &T) -> Self {
        Self {
            hash: Self::PRIME
                .wrapping_mul(self.hash)
                .wrapping_add(value.value_hash()),
        }
    }

    /// The accumulated hash
    pub fn finish(self) -> i32 {
        self.hash
    }
}

impl Default for HashBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueHash for str {
    fn value_hash(&self) -> i32 {
        self.encode_utf16().fold(0i32, |hash, unit| {
            hash.wrapping_mul(HashBuilder::PRIME)
                .wrapping_add(i32::from(unit))
        })
    }
}

impl ValueHash for String {
    fn value_hash(&self) -> i32 {
        self.as_str().value_hash()
    }
}

impl ValueHash for i32 {
    fn value_hash(&self) -> i32 {
        *self
    }
}

impl ValueHash for bool {
    fn value_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl ValueHash for DateTime<Utc> {
    fn value_hash(&self) -> i32 {
        let millis = self.timestamp_millis() as u64;
        (millis ^ (millis >> 32)) as i32
    }
}

impl<T: ValueHash> ValueHash for Option<T> {
    fn value_hash(&self) -> i32 {
        self.as_ref().map_or(0, ValueHash::value_hash)
    }
}

impl<T: ValueHash> ValueHash for [T] {
    fn value_hash(&self) -> i32 {
        self.iter()
            .fold(HashBuilder::new(), |builder, item| builder.field(item))
            .finish()
    }
}

impl<T: ValueHash> ValueHash for Vec<T> {
    fn value_hash(&self) -> i32 {
        self.as_slice().value_hash()
    }
}
