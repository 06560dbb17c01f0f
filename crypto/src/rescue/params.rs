// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Parameter derivation for the Rescue permutation.
//!
//! This module computes everything a [RescueDesc](super::RescueDesc) needs at construction
//! time: the S-box exponents, the round count, the Cauchy MDS matrix with its closed-form
//! inverse, and the SHAKE256-derived round constants. Arbitrary-precision integers are used
//! only here - for the extended-Euclidean inverse of alpha modulo p - 1, for the exact
//! binomials of the hash-mode round count, and for the decimal expansion of p in the
//! hash-mode seed string. Steady-state field arithmetic never touches them.

use math::{Fp, Matrix, U256};
use num_bigint::{BigInt, BigUint, Sign};

use super::{RescueMode, CIPHER_SECURITY_LEVEL, HASH_SECURITY_LEVEL};
use crate::{errors::RescueError, random::random_bytes, xof::Shake256Xof};

// CONSTANTS
// ================================================================================================

// Candidate S-box exponents: small primes tried in ascending order.
const SMALL_PRIMES: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

// Bytes sampled from the XOF per field element: 32 bytes for the element plus 16 extra
// bytes so that the wide reduction yields a near-uniform distribution.
const ELEMENT_SAMPLE_BYTES: usize = (Fp::BITS + 7) / 8 + 16;

// Seed string for cipher-mode round constants.
const CIPHER_SEED: &str = "encrypt everything, compute anything";

// ALPHA
// ================================================================================================

/// Returns the S-box exponent alpha - the smallest prime which does not divide p - 1 - and
/// its multiplicative inverse modulo p - 1.
///
/// For p = 2^255 - 19 this yields alpha = 5.
///
/// # Errors
/// Returns an error if no suitable prime exists among the candidates; unreachable for this
/// field.
pub fn get_alpha_and_inverse() -> Result<(U256, U256), RescueError> {
    let p_minus_1 = modulus_big() - 1u8;

    for alpha in SMALL_PRIMES {
        if (&p_minus_1 % alpha) != BigUint::from(0u8) {
            let alpha_big = BigInt::from(alpha);
            let inverse = mod_inverse(&alpha_big, &BigInt::from(p_minus_1.clone())).ok_or_else(
                || {
                    RescueError::InternalInvariant(String::from(
                        "alpha has no inverse modulo p - 1",
                    ))
                },
            )?;
            return Ok((U256::from_u64(alpha), u256_from_biguint(&inverse)));
        }
    }

    Err(RescueError::InternalInvariant(String::from(
        "no prime alpha found that does not divide p - 1",
    )))
}

/// Computes the inverse of `a` modulo `m` via the extended Euclidean algorithm, returning
/// the non-negative residue, or `None` if the inverse does not exist.
fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let (mut old_r, mut r) = (a.clone(), m.clone());
    let (mut old_s, mut s) = (BigInt::from(1u8), BigInt::from(0u8));

    while r != BigInt::from(0u8) {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = core::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if old_r != BigInt::from(1u8) {
        return None;
    }

    let mut result = old_s % m;
    if result.sign() == Sign::Minus {
        result += m;
    }
    Some(result)
}

// ROUND COUNT
// ================================================================================================

/// Returns the round count N for the specified mode; the permutation applies 2N rounds.
///
/// Cipher mode follows algorithm 7 of the Rescue cipher specification at a 128-bit security
/// level; hash mode follows the Rescue-Prime round-count search with exact binomials at a
/// 256-bit security level.
pub fn get_n_rounds(mode: &RescueMode, alpha: &U256, m: usize) -> usize {
    let log2_p = Fp::BITS as f64;
    let alpha_f = alpha.limb(0) as f64;

    match mode {
        RescueMode::Cipher { .. } => {
            let security = CIPHER_SECURITY_LEVEL as f64;

            let l0 = (2.0 * security / ((m as f64 + 1.0) * (log2_p - (alpha_f - 1.0).log2())))
                .ceil() as usize;

            let l1 = if alpha.limb(0) == 3 {
                ((security + 2.0) / (4.0 * m as f64)).ceil() as usize
            } else {
                ((security + 3.0) / (5.5 * m as f64)).ceil() as usize
            };

            2 * l0.max(l1).max(5)
        },
        RescueMode::Hash { capacity, .. } => {
            let rate = m - capacity;

            let dcon = |n: usize| (0.5 * (alpha_f - 1.0) * (m * (n - 1)) as f64 + 2.0) as usize;
            let v = |n: usize| m * (n - 1) + rate;

            let target = BigUint::from(1u8) << HASH_SECURITY_LEVEL;

            let mut l1 = 1;
            let mut tmp = binomial(v(l1) + dcon(l1), v(l1));
            while &tmp * &tmp <= target && l1 <= 23 {
                l1 += 1;
                tmp = binomial(v(l1) + dcon(l1), v(l1));
            }

            (1.5 * l1.max(5) as f64).ceil() as usize
        },
    }
}

/// Computes the binomial coefficient C(n, k) exactly.
fn binomial(n: usize, k: usize) -> BigUint {
    let k = k.min(n - k);
    let mut result = BigUint::from(1u8);
    for i in 0..k {
        // the running product of i+1 consecutive ratios stays integral at every step
        result = result * (n - i) / (i + 1);
    }
    result
}

// MDS MATRICES
// ================================================================================================

/// Builds the Cauchy MDS matrix M[i][j] = 1/(i+j) for i, j in [1, m].
///
/// # Errors
/// Returns an error if a field inversion fails; unreachable since i + j < p.
pub fn build_cauchy_matrix(m: usize) -> Result<Matrix, RescueError> {
    let mut result = Matrix::new(m, m);
    for i in 1..=m {
        for j in 1..=m {
            result[(i - 1, j - 1)] = Fp::from((i + j) as u64).inv()?;
        }
    }
    Ok(result)
}

/// Builds the inverse of the Cauchy MDS matrix from its closed form: for 1-indexed i, j the
/// entry is
///
/// ```text
/// prod_k (-i-k) * prod_k (j+k)
/// / ( prod_{u != j} (j-u) * prod_{k != i} (k-i) * (-i-j) )
/// ```
///
/// with k and u ranging over [1, m] and negative integers mapped into the field as p - |n|.
///
/// # Errors
/// Returns an error if a field inversion fails; unreachable since every denominator factor
/// is a non-zero difference of distinct small integers.
pub fn build_inverse_cauchy_matrix(m: usize) -> Result<Matrix, RescueError> {
    let mut result = Matrix::new(m, m);

    for i in 1..=m as i64 {
        for j in 1..=m as i64 {
            let mut numerator = Fp::ONE;
            for k in 1..=m as i64 {
                numerator *= fp_from_int(-i - k);
            }
            for k in 1..=m as i64 {
                numerator *= fp_from_int(j + k);
            }

            let mut denominator = fp_from_int(-i - j);
            for u in 1..=m as i64 {
                if u != j {
                    denominator *= fp_from_int(j - u);
                }
            }
            for k in 1..=m as i64 {
                if k != i {
                    denominator *= fp_from_int(k - i);
                }
            }

            result[(i as usize - 1, j as usize - 1)] = numerator * denominator.inv()?;
        }
    }

    Ok(result)
}

/// Maps a (possibly negative) integer into the field.
fn fp_from_int(value: i64) -> Fp {
    if value >= 0 {
        Fp::from(value as u64)
    } else {
        -Fp::from(value.unsigned_abs())
    }
}

// ROUND CONSTANTS
// ================================================================================================

/// Samples the round constants for the specified mode as 2N + 1 column vectors of length m.
///
/// Both modes squeeze their entire byte budget from SHAKE256 in a single call and map each
/// 48-byte little-endian chunk into the field with the wide reduction.
pub fn sample_constants(
    mode: &RescueMode,
    m: usize,
    n_rounds: usize,
) -> Result<Vec<Matrix>, RescueError> {
    match mode {
        RescueMode::Cipher { .. } => sample_cipher_constants(m, n_rounds),
        RescueMode::Hash { capacity, .. } => sample_hash_constants(m, *capacity, n_rounds),
    }
}

/// Samples cipher-mode round constants as the affine orbit c_0, A*c + b.
///
/// The seed stream provides an m x m matrix A, an initial vector c_0, and an affine term b;
/// the constants are c_0 followed by 2N applications of c -> A*c + b.
fn sample_cipher_constants(m: usize, n_rounds: usize) -> Result<Vec<Matrix>, RescueError> {
    let mut hasher = Shake256Xof::new();
    hasher.absorb_str(CIPHER_SEED)?;

    let n_elements = m * m + 2 * m;
    let randomness = hasher.squeeze(n_elements * ELEMENT_SAMPLE_BYTES)?;

    let mut elements = randomness
        .chunks(ELEMENT_SAMPLE_BYTES)
        .map(Fp::from_wide_bytes)
        .collect::<Vec<_>>();

    let affine_term = Matrix::column(elements.split_off(m * m + m));
    let initial_constant = Matrix::column(elements.split_off(m * m));
    let mut constant_mat = Matrix::from_rows(
        elements.chunks(m).map(|row| row.to_vec()).collect(),
    )?;

    // A singular A is redrawn from the OS RNG rather than by continuing the XOF stream.
    // This mirrors the reference implementation exactly, including its defect: the redraw
    // is non-deterministic, so two descriptors built from the same key would diverge if it
    // ever fired. It cannot fire for the standard m = 5 seed.
    while constant_mat.det()?.is_zero() {
        let fresh = random_bytes(m * m * ELEMENT_SAMPLE_BYTES)?;
        let rows = fresh
            .chunks(ELEMENT_SAMPLE_BYTES)
            .map(Fp::from_wide_bytes)
            .collect::<Vec<_>>()
            .chunks(m)
            .map(|row| row.to_vec())
            .collect::<Vec<_>>();
        constant_mat = Matrix::from_rows(rows)?;
    }

    let mut round_constants = Vec::with_capacity(2 * n_rounds + 1);
    round_constants.push(initial_constant);
    for r in 0..2 * n_rounds {
        let next = constant_mat.mat_mul(&round_constants[r])?.add(&affine_term, false)?;
        round_constants.push(next);
    }

    Ok(round_constants)
}

/// Samples hash-mode round constants directly from the seed stream, with a zero vector
/// prepended as K_0.
fn sample_hash_constants(
    m: usize,
    capacity: usize,
    n_rounds: usize,
) -> Result<Vec<Matrix>, RescueError> {
    let mut hasher = Shake256Xof::new();
    hasher.absorb_str(&hash_seed(m, capacity))?;

    let n_elements = 2 * m * n_rounds;
    let randomness = hasher.squeeze(n_elements * ELEMENT_SAMPLE_BYTES)?;

    let mut round_constants = Vec::with_capacity(2 * n_rounds + 1);
    round_constants.push(Matrix::column(vec![Fp::ZERO; m]));

    for r in 0..2 * n_rounds {
        let mut data = Vec::with_capacity(m);
        for i in 0..m {
            let offset = (r * m + i) * ELEMENT_SAMPLE_BYTES;
            data.push(Fp::from_wide_bytes(&randomness[offset..offset + ELEMENT_SAMPLE_BYTES]));
        }
        round_constants.push(Matrix::column(data));
    }

    Ok(round_constants)
}

/// Returns the hash-mode seed string `Rescue-XLIX(<decimal p>,<m>,<capacity>,<security>)`.
fn hash_seed(m: usize, capacity: usize) -> String {
    format!("Rescue-XLIX({},{},{},{})", modulus_big(), m, capacity, HASH_SECURITY_LEVEL)
}

// HELPERS
// ================================================================================================

/// Returns the field modulus as an arbitrary-precision integer.
fn modulus_big() -> BigUint {
    BigUint::from_bytes_le(&Fp::MODULUS.to_bytes_le())
}

/// Converts a non-negative arbitrary-precision integer smaller than 2^256 into a [U256].
fn u256_from_biguint(value: &BigInt) -> U256 {
    let (_, bytes) = value.to_bytes_le();
    U256::from_bytes_le(&bytes)
}
