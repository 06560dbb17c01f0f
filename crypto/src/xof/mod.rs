// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! SHAKE256 extendable-output function with a one-shot squeeze.
//!
//! Round-constant derivation consumes SHAKE256 output in a single squeeze: every consumer
//! computes its total byte budget up front and extracts all bytes in one call. The wrapper
//! enforces this discipline - a second squeeze (or an absorb after the squeeze) fails with
//! [RescueError::AlreadyFinalized]. Incremental multi-shot squeezing would consume the seed
//! stream differently and break interoperability with the reference implementation.

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use crate::errors::RescueError;

// SHAKE256 XOF
// ================================================================================================

/// SHAKE256 hasher with absorb followed by a single extendable-output squeeze.
pub struct Shake256Xof {
    state: Option<Shake256>,
}

impl Shake256Xof {
    /// Creates a new SHAKE256 hasher ready to absorb data.
    pub fn new() -> Self {
        Self { state: Some(Shake256::default()) }
    }

    /// Absorbs the provided bytes into the hasher state.
    ///
    /// # Errors
    /// Returns an error if the output was already squeezed.
    pub fn absorb(&mut self, data: &[u8]) -> Result<(), RescueError> {
        match self.state.as_mut() {
            Some(state) => {
                state.update(data);
                Ok(())
            },
            None => Err(RescueError::AlreadyFinalized),
        }
    }

    /// Absorbs the provided string into the hasher state; the string is absorbed as its raw
    /// ASCII/UTF-8 bytes with no length prefix and no terminator.
    ///
    /// # Errors
    /// Returns an error if the output was already squeezed.
    pub fn absorb_str(&mut self, data: &str) -> Result<(), RescueError> {
        self.absorb(data.as_bytes())
    }

    /// Squeezes `len` bytes of output, consuming the absorb state.
    ///
    /// # Errors
    /// Returns an error if the output was already squeezed; each instance supports exactly
    /// one squeeze.
    pub fn squeeze(&mut self, len: usize) -> Result<Vec<u8>, RescueError> {
        let state = self.state.take().ok_or(RescueError::AlreadyFinalized)?;
        let mut result = vec![0u8; len];
        state.finalize_xof().read(&mut result);
        Ok(result)
    }
}

impl Default for Shake256Xof {
    fn default() -> Self {
        Self::new()
    }
}

// ONE-SHOT HELPERS
// ================================================================================================

/// Computes `len` bytes of SHAKE256 output over the provided data.
pub fn shake256(data: &[u8], len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(data);
    let mut result = vec![0u8; len];
    hasher.finalize_xof().read(&mut result);
    result
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::{shake256, RescueError, Shake256Xof};

    #[test]
    fn absorb_then_squeeze() {
        let mut xof = Shake256Xof::new();
        xof.absorb(b"abc").unwrap();
        let out = xof.squeeze(32).unwrap();

        // SHAKE256("abc"), first 32 bytes (FIPS 202 reference vector)
        let expected = [
            0x48, 0x33, 0x66, 0x60, 0x13, 0x60, 0xa8, 0x77, 0x1c, 0x68, 0x63, 0x08, 0x0c, 0xc4,
            0x11, 0x4d, 0x8d, 0xb4, 0x45, 0x30, 0xf8, 0xf1, 0xe1, 0xee, 0x4f, 0x94, 0xea, 0x37,
            0xe7, 0x8b, 0x57, 0x39,
        ];
        assert_eq!(expected.to_vec(), out);
        assert_eq!(expected.to_vec(), shake256(b"abc", 32));
    }

    #[test]
    fn split_absorb_matches_one_shot() {
        let mut xof = Shake256Xof::new();
        xof.absorb(b"encrypt everything, ").unwrap();
        xof.absorb_str("compute anything").unwrap();
        let split = xof.squeeze(64).unwrap();

        assert_eq!(shake256(b"encrypt everything, compute anything", 64), split);
    }

    #[test]
    fn second_squeeze_fails() {
        let mut xof = Shake256Xof::new();
        xof.absorb(b"data").unwrap();
        xof.squeeze(16).unwrap();

        assert_eq!(Err(RescueError::AlreadyFinalized), xof.squeeze(16));
        assert_eq!(Err(RescueError::AlreadyFinalized), xof.absorb(b"more"));
    }

    #[test]
    fn long_output_is_prefix_consistent() {
        // a single long squeeze is a prefix extension of a shorter one
        let short = shake256(b"seed", 32);
        let long = shake256(b"seed", 96);
        assert_eq!(short, long[..32].to_vec());
    }
}
