// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Cryptographically secure random generation.
//!
//! All randomness is drawn from the operating system entropy source; failures surface as
//! [RescueError::RngFailure]. Uniform field elements are produced by rejection sampling.

use math::{Fp, Matrix, U256};
use rand::{rngs::OsRng, RngCore};

use crate::errors::RescueError;

// RANDOM BYTES
// ================================================================================================

/// Fills a new vector of the specified length with cryptographically secure random bytes.
///
/// # Errors
/// Returns an error if the OS entropy source is unavailable.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, RescueError> {
    let mut result = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut result)
        .map_err(|err| RescueError::RngFailure(err.to_string()))?;
    Ok(result)
}

/// Fills a new fixed-size array with cryptographically secure random bytes.
///
/// # Errors
/// Returns an error if the OS entropy source is unavailable.
pub fn random_array<const N: usize>() -> Result<[u8; N], RescueError> {
    let mut result = [0u8; N];
    OsRng
        .try_fill_bytes(&mut result)
        .map_err(|err| RescueError::RngFailure(err.to_string()))?;
    Ok(result)
}

// RANDOM FIELD ELEMENTS
// ================================================================================================

/// Returns a uniformly random value in [0, `bound`) produced by rejection sampling
/// little-endian draws of `ceil(bit_length(bound) / 8)` bytes.
///
/// # Errors
/// Returns an error if the OS entropy source is unavailable or if `bound` is zero.
pub fn random_field_elem(bound: &U256) -> Result<U256, RescueError> {
    if bound.is_zero() {
        return Err(RescueError::InvalidArgument(String::from("bound must be non-zero")));
    }

    let byte_length = (bound.bit_length() + 7) / 8;
    loop {
        let bytes = random_bytes(byte_length)?;
        let candidate = U256::from_bytes_le(&bytes);
        if candidate < *bound {
            return Ok(candidate);
        }
    }
}

/// Returns a uniformly random field element in [0, p).
///
/// # Errors
/// Returns an error if the OS entropy source is unavailable.
pub fn random_element() -> Result<Fp, RescueError> {
    // the sampled value is below the modulus, so no reduction takes place
    random_field_elem(&Fp::MODULUS).map(Fp::new)
}

/// Returns a matrix of the specified dimensions filled with uniformly random field elements.
///
/// # Errors
/// Returns an error if the OS entropy source is unavailable.
pub fn random_matrix(rows: usize, cols: usize) -> Result<Matrix, RescueError> {
    let mut result = Matrix::new(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            result[(i, j)] = random_element()?;
        }
    }
    Ok(result)
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use math::{Fp, U256};

    use super::{random_bytes, random_element, random_field_elem, random_matrix};

    #[test]
    fn bytes_have_requested_length() {
        assert_eq!(0, random_bytes(0).unwrap().len());
        assert_eq!(48, random_bytes(48).unwrap().len());

        // two draws of this size colliding indicates a broken source
        assert_ne!(random_bytes(32).unwrap(), random_bytes(32).unwrap());
    }

    #[test]
    fn field_elem_respects_bound() {
        let bound = U256::from_u64(100);
        for _ in 0..50 {
            assert!(random_field_elem(&bound).unwrap() < bound);
        }

        assert!(random_field_elem(&U256::ZERO).is_err());
    }

    #[test]
    fn elements_are_canonical() {
        for _ in 0..20 {
            let e = random_element().unwrap();
            assert!(*e.value() < Fp::MODULUS);
        }
    }

    #[test]
    fn matrix_dimensions() {
        let m = random_matrix(3, 4).unwrap();
        assert_eq!(3, m.rows());
        assert_eq!(4, m.cols());
    }
}
