// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rescue-Prime sponge hash over the Curve25519 base field.
//!
//! The sponge absorbs field elements in rate-sized chunks into a zero-initialized state,
//! applies the hash-mode Rescue permutation after each chunk, and squeezes the digest from
//! the first elements of the final state. Messages are padded with a single one element
//! followed by zeros up to a multiple of the rate (algorithm 2 of the Rescue-Prime
//! specification), so messages which differ only in trailing zeros hash differently.

use math::{Fp, Matrix};

use super::RescueDesc;
use crate::errors::RescueError;

// CONSTANTS
// ================================================================================================

/// Default rate (number of message elements absorbed per permutation).
pub const RATE: usize = 7;

/// Default capacity (hidden state size).
pub const CAPACITY: usize = 5;

/// Default state size.
pub const STATE_WIDTH: usize = RATE + CAPACITY;

/// Default digest length in field elements.
pub const DIGEST_LENGTH: usize = 5;

// RESCUE HASH
// ================================================================================================

/// Rescue-Prime sponge hash.
///
/// A hash instance is immutable after construction and may be shared by any number of
/// concurrent callers; [digest()](RescueHash::digest) is pure in its receiver.
pub struct RescueHash {
    rate: usize,
    digest_length: usize,
    desc: RescueDesc,
}

impl RescueHash {
    /// Creates a new hash instance with the standard parameters: rate 7, capacity 5,
    /// digest length 5.
    ///
    /// # Errors
    /// Returns an error if parameter derivation fails.
    pub fn standard() -> Result<Self, RescueError> {
        Self::new(RATE, CAPACITY, DIGEST_LENGTH)
    }

    /// Creates a new hash instance with the provided parameters. The sponge state has
    /// `rate + capacity` elements.
    ///
    /// # Errors
    /// Returns an error if any parameter is zero, or if the digest length exceeds the state
    /// size, or if parameter derivation fails.
    pub fn new(rate: usize, capacity: usize, digest_length: usize) -> Result<Self, RescueError> {
        if rate == 0 {
            return Err(RescueError::InvalidArgument(String::from("rate must be positive")));
        }
        if capacity == 0 {
            return Err(RescueError::InvalidArgument(String::from("capacity must be positive")));
        }
        if digest_length == 0 {
            return Err(RescueError::InvalidArgument(String::from(
                "digest length must be positive",
            )));
        }
        if digest_length > rate + capacity {
            return Err(RescueError::InvalidArgument(String::from(
                "digest length cannot exceed state size",
            )));
        }

        let desc = RescueDesc::new_hash(rate + capacity, capacity)?;
        Ok(Self { rate, digest_length, desc })
    }

    /// Returns the rate of this instance.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Returns the digest length of this instance.
    pub fn digest_length(&self) -> usize {
        self.digest_length
    }

    /// Returns the underlying permutation descriptor.
    pub fn desc(&self) -> &RescueDesc {
        &self.desc
    }

    /// Hashes a message of field elements into `digest_length` field elements.
    ///
    /// The message may be empty; padding still applies, so the digest of the empty message
    /// is the permutation of the padding block.
    ///
    /// # Errors
    /// Returns an error only if an internal matrix operation fails, which cannot happen for
    /// a well-formed instance.
    pub fn digest(&self, message: &[Fp]) -> Result<Vec<Fp>, RescueError> {
        let m = self.desc.m();

        // pad with a one element, then zeros up to a multiple of the rate
        let mut padded = message.to_vec();
        padded.push(Fp::ONE);
        while padded.len() % self.rate != 0 {
            padded.push(Fp::ZERO);
        }

        // absorb rate-sized chunks; the capacity portion of each absorption vector is zero
        let mut state = Matrix::column(vec![Fp::ZERO; m]);
        for chunk in padded.chunks(self.rate) {
            let mut absorb = Vec::with_capacity(m);
            absorb.extend_from_slice(chunk);
            absorb.resize(m, Fp::ZERO);

            // the absorb addition always takes the constant-time path
            let state_with_input = state.add(&Matrix::column(absorb), true)?;
            state = self.desc.permute(&state_with_input)?;
        }

        // squeeze: the digest is the first digest_length elements of the state
        let state_data = state.to_vector()?;
        Ok(state_data[..self.digest_length].to_vec())
    }
}
