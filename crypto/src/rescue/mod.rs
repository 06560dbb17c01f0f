// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Parameters and core operations of the Rescue permutation.
//!
//! A [RescueDesc] holds the fully elaborated parameter set for one instance of the
//! permutation: the operating mode, the S-box exponents alpha and alpha^-1, the number of
//! rounds, the MDS matrix with its inverse, and the round keys. It is built once - from a
//! key in cipher mode or from (state size, capacity) in hash mode - and is immutable
//! afterwards, so a single descriptor may be shared by any number of concurrent callers.
//!
//! The implementation follows the Rescue cipher and the Rescue-XLIX (Rescue-Prime) hash
//! design; see <https://eprint.iacr.org/2020/1143.pdf> and
//! <https://tosc.iacr.org/index.php/ToSC/article/view/8695> for the round structure and the
//! parameter derivation algorithms.

use math::{Fp, Matrix, U256};

use crate::errors::RescueError;

pub mod cipher;
pub mod hash;
mod mds;
mod params;


// CONSTANTS
// ================================================================================================

/// Security level of the block cipher construction, in bits.
pub const CIPHER_SECURITY_LEVEL: usize = 128;

/// Security level of the hash construction, in bits.
pub const HASH_SECURITY_LEVEL: usize = 256;

// RESCUE MODE
// ================================================================================================

/// Operating mode of a Rescue instance.
///
/// The two modes differ in how round keys are obtained (a key schedule vs. directly sampled
/// constants), in the round-count formula, and in which S-box exponent is applied in even
/// and odd rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RescueMode {
    /// Block cipher keyed with a vector of at least two field elements.
    Cipher {
        /// The cipher key; its length determines the state size.
        key: Vec<Fp>,
    },
    /// Sponge hash with the specified state size and capacity.
    Hash {
        /// Total state size (rate + capacity).
        m: usize,
        /// Capacity (hidden state) size; must be smaller than `m`.
        capacity: usize,
    },
}

impl RescueMode {
    /// Returns true if this is the cipher mode.
    pub fn is_cipher(&self) -> bool {
        matches!(self, Self::Cipher { .. })
    }

    /// Returns the state size implied by this mode.
    pub fn state_size(&self) -> usize {
        match self {
            Self::Cipher { key } => key.len(),
            Self::Hash { m, .. } => *m,
        }
    }
}

// RESCUE DESCRIPTOR
// ================================================================================================

/// Fully elaborated parameter set for one Rescue instance.
pub struct RescueDesc {
    mode: RescueMode,
    m: usize,
    alpha: U256,
    alpha_inverse: U256,
    n_rounds: usize,
    mds_mat: Matrix,
    mds_mat_inverse: Matrix,
    round_keys: Vec<Matrix>,
}

impl RescueDesc {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a new descriptor for cipher mode from the provided key.
    ///
    /// # Errors
    /// Returns an error if the key has fewer than two elements, or if parameter derivation
    /// fails.
    pub fn new_cipher(key: Vec<Fp>) -> Result<Self, RescueError> {
        if key.len() < 2 {
            return Err(RescueError::InvalidArgument(String::from(
                "cipher key must have at least 2 elements",
            )));
        }
        Self::build(RescueMode::Cipher { key })
    }

    /// Creates a new descriptor for hash mode with the provided state size and capacity.
    ///
    /// # Errors
    /// Returns an error if the capacity is zero or not smaller than the state size, or if
    /// parameter derivation fails.
    pub fn new_hash(m: usize, capacity: usize) -> Result<Self, RescueError> {
        if capacity == 0 {
            return Err(RescueError::InvalidArgument(String::from("capacity must be positive")));
        }
        if m <= capacity {
            return Err(RescueError::InvalidArgument(String::from(
                "state size must be greater than capacity",
            )));
        }
        Self::build(RescueMode::Hash { m, capacity })
    }

    fn build(mode: RescueMode) -> Result<Self, RescueError> {
        let m = mode.state_size();
        let (alpha, alpha_inverse) = params::get_alpha_and_inverse()?;
        let n_rounds = params::get_n_rounds(&mode, &alpha, m);

        // standard state sizes load the MDS matrix and its inverse from precomputed tables;
        // other sizes derive both from the Cauchy form
        let mds_mat = match mds::mds_matrix(m) {
            Some(mat) => mat,
            None => {
                let mat = params::build_cauchy_matrix(m)?;
                if mat.det()?.is_zero() {
                    return Err(RescueError::InternalInvariant(format!(
                        "Cauchy MDS matrix of size {m} is singular"
                    )));
                }
                mat
            },
        };
        let mds_mat_inverse = match mds::inv_mds_matrix(m) {
            Some(mat) => mat,
            None => params::build_inverse_cauchy_matrix(m)?,
        };

        let round_constants = params::sample_constants(&mode, m, n_rounds)?;

        // in cipher mode the sampled constants act as subkeys of a key schedule: running the
        // permutation on the key column yields the round keys; in hash mode the constants
        // are the round keys
        let round_keys = match &mode {
            RescueMode::Cipher { key } => {
                let key_vec = Matrix::column(key.clone());
                rescue_permutation(
                    &mode,
                    &alpha,
                    &alpha_inverse,
                    &mds_mat,
                    &round_constants,
                    &key_vec,
                )?
            },
            RescueMode::Hash { .. } => round_constants,
        };

        Ok(Self {
            mode,
            m,
            alpha,
            alpha_inverse,
            n_rounds,
            mds_mat,
            mds_mat_inverse,
            round_keys,
        })
    }

    // ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the operating mode of this descriptor.
    pub fn mode(&self) -> &RescueMode {
        &self.mode
    }

    /// Returns the state size m.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Returns the S-box exponent alpha.
    pub fn alpha(&self) -> &U256 {
        &self.alpha
    }

    /// Returns the inverse S-box exponent alpha^-1 mod (p - 1).
    pub fn alpha_inverse(&self) -> &U256 {
        &self.alpha_inverse
    }

    /// Returns the round count N; the permutation applies 2N rounds.
    pub fn n_rounds(&self) -> usize {
        self.n_rounds
    }

    /// Returns the MDS matrix.
    pub fn mds_matrix(&self) -> &Matrix {
        &self.mds_mat
    }

    /// Returns the inverse of the MDS matrix.
    pub fn mds_matrix_inverse(&self) -> &Matrix {
        &self.mds_mat_inverse
    }

    /// Returns the round keys K_0 .. K_2N as column vectors.
    pub fn round_keys(&self) -> &[Matrix] {
        &self.round_keys
    }

    // PERMUTATION
    // --------------------------------------------------------------------------------------------

    /// Applies the forward Rescue permutation to the provided state column vector.
    ///
    /// # Errors
    /// Returns an error if the state is not a length-m column vector.
    pub fn permute(&self, state: &Matrix) -> Result<Matrix, RescueError> {
        let states = rescue_permutation(
            &self.mode,
            &self.alpha,
            &self.alpha_inverse,
            &self.mds_mat,
            &self.round_keys,
            state,
        )?;
        Ok(states[2 * self.n_rounds].clone())
    }

    /// Applies the inverse Rescue permutation to the provided state column vector.
    ///
    /// # Errors
    /// Returns an error if the state is not a length-m column vector.
    pub fn permute_inverse(&self, state: &Matrix) -> Result<Matrix, RescueError> {
        rescue_permutation_inverse(
            &self.mode,
            &self.alpha,
            &self.alpha_inverse,
            &self.mds_mat_inverse,
            &self.round_keys,
            state,
        )
    }
}

// PERMUTATION FUNCTIONS
// ================================================================================================

/// Returns the S-box exponents applied in even and odd rounds for the specified mode.
///
/// In cipher mode even rounds raise to alpha^-1 and odd rounds to alpha; hash mode inverts
/// the parity. The inverse permutation walks the rounds backwards, which pairs each round
/// with the exponent that undoes its forward counterpart - the assignment below is shared by
/// both directions.
fn round_exponents<'a>(
    mode: &RescueMode,
    alpha: &'a U256,
    alpha_inverse: &'a U256,
) -> (&'a U256, &'a U256) {
    if mode.is_cipher() {
        (alpha_inverse, alpha)
    } else {
        (alpha, alpha_inverse)
    }
}

/// Applies the forward Rescue permutation and returns all intermediate states.
///
/// With subkeys K_0 .. K_2N, the walk is s_0 = state + K_0 and
/// s_(r+1) = M * S(s_r) + K_(r+1), where S raises every state element to the exponent
/// assigned to round r. The returned vector holds s_0 .. s_2N; the key schedule consumes
/// all of them, the permutation proper only the last.
pub(crate) fn rescue_permutation(
    mode: &RescueMode,
    alpha: &U256,
    alpha_inverse: &U256,
    mds_mat: &Matrix,
    subkeys: &[Matrix],
    state: &Matrix,
) -> Result<Vec<Matrix>, RescueError> {
    let (exp_even, exp_odd) = round_exponents(mode, alpha, alpha_inverse);

    let mut states = Vec::with_capacity(subkeys.len());
    states.push(state.add(&subkeys[0], false)?);

    for r in 0..subkeys.len() - 1 {
        let exp = if r % 2 == 0 { exp_even } else { exp_odd };
        let s = states[r].pow(exp);
        states.push(mds_mat.mat_mul(&s)?.add(&subkeys[r + 1], false)?);
    }

    Ok(states)
}

/// Applies the inverse Rescue permutation, undoing the rounds in reverse order:
/// u_(r+1) = S'(M^-1 * (u_r - K_(2N-r))) and finally u_2N - K_0.
pub(crate) fn rescue_permutation_inverse(
    mode: &RescueMode,
    alpha: &U256,
    alpha_inverse: &U256,
    mds_mat_inverse: &Matrix,
    subkeys: &[Matrix],
    state: &Matrix,
) -> Result<Matrix, RescueError> {
    let (exp_even, exp_odd) = round_exponents(mode, alpha, alpha_inverse);

    let n = subkeys.len() - 1;
    let mut current = state.clone();

    for r in 0..n {
        let s = current.sub(&subkeys[n - r], false)?;
        let s = mds_mat_inverse.mat_mul(&s)?;
        let exp = if r % 2 == 0 { exp_even } else { exp_odd };
        current = s.pow(exp);
    }

    Ok(current.sub(&subkeys[0], false)?)
}
