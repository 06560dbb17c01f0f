// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains utility traits and functions used by the other crates of the Rescue
//! primitive suite: byte-level serialization plumbing and a trait for building values from
//! random bytes.

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate alloc;

mod serde;
pub use serde::{ByteReader, ByteWriter, Deserializable, Serializable, SliceReader};

mod errors;
pub use errors::DeserializationError;

#[cfg(test)]
mod tests;

// RANDOMIZABLE
// ================================================================================================

/// Defines how `Self` can be built from a sequence of random bytes.
///
/// For types with a non-uniform byte encoding (e.g. field elements), `from_random_bytes()` may
/// reject a candidate by returning `None`; callers are expected to retry with fresh bytes.
pub trait Randomizable: Sized {
    /// Size of `Self` in bytes.
    ///
    /// This is used to determine how many bytes should be passed to the
    /// [from_random_bytes()](Self::from_random_bytes) function.
    const VALUE_SIZE: usize;

    /// Returns `Self` if the set of bytes forms a valid value, otherwise returns None.
    fn from_random_bytes(source: &[u8]) -> Option<Self>;
}

impl Randomizable for u64 {
    const VALUE_SIZE: usize = 8;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source[..Self::VALUE_SIZE].try_into().ok().map(u64::from_le_bytes)
    }
}

impl Randomizable for u128 {
    const VALUE_SIZE: usize = 16;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source[..Self::VALUE_SIZE].try_into().ok().map(u128::from_le_bytes)
    }
}

impl Randomizable for u32 {
    const VALUE_SIZE: usize = 4;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source[..Self::VALUE_SIZE].try_into().ok().map(u32::from_le_bytes)
    }
}

impl Randomizable for u16 {
    const VALUE_SIZE: usize = 2;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source[..Self::VALUE_SIZE].try_into().ok().map(u16::from_le_bytes)
    }
}

impl Randomizable for u8 {
    const VALUE_SIZE: usize = 1;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source.first().copied()
    }
}

impl<const N: usize> Randomizable for [u8; N] {
    const VALUE_SIZE: usize = N;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source[..N].try_into().ok()
    }
}
