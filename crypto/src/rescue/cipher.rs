// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rescue block cipher in counter mode.
//!
//! A cipher instance derives its 5-element key from a 32-byte shared secret through the
//! Rescue-Prime hash (the one-step key derivation of NIST SP 800-56C, Option 1) and builds
//! a cipher-mode permutation descriptor from it. Encryption runs the permutation over
//! per-block counter vectors `[nonce, block_index, 0, 0, 0]` and adds the resulting
//! keystream to the plaintext element-wise in the field; decryption subtracts it.
//!
//! No authentication is provided: decrypting with a wrong key or a wrong nonce silently
//! yields garbage. Nonce reuse across messages leaks the difference of the plaintexts, as
//! in any counter-mode construction; callers must ensure uniqueness, e.g. with
//! [generate_nonce()].

use math::{Fp, Matrix, U256};
use utils::{ByteReader, SliceReader};

use super::{hash::RescueHash, RescueDesc};
use crate::{errors::RescueError, random::random_array};

// CONSTANTS
// ================================================================================================

/// Size of the shared secret in bytes.
pub const SECRET_SIZE: usize = 32;

/// Size of the nonce in bytes.
pub const NONCE_SIZE: usize = 16;

/// Number of field elements produced by one permutation of the counter.
pub const BLOCK_SIZE: usize = 5;

// RESCUE CIPHER
// ================================================================================================

/// Rescue block cipher in counter mode.
///
/// A cipher instance is immutable after construction and may be shared by any number of
/// concurrent callers; all methods are pure in their receiver. Two instances built from the
/// same shared secret produce identical ciphertexts for identical (plaintext, nonce) pairs.
pub struct RescueCipher {
    desc: RescueDesc,
}

impl RescueCipher {
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------

    /// Creates a new cipher instance from a 32-byte shared secret.
    ///
    /// # Errors
    /// Returns an error if the shared secret is not exactly 32 bytes or if parameter
    /// derivation fails.
    pub fn new(shared_secret: &[u8]) -> Result<Self, RescueError> {
        let key = derive_key(shared_secret)?;
        Ok(Self { desc: RescueDesc::new_cipher(key)? })
    }

    /// Returns the underlying permutation descriptor.
    pub fn desc(&self) -> &RescueDesc {
        &self.desc
    }

    // ENCRYPTION / DECRYPTION
    // --------------------------------------------------------------------------------------------

    /// Encrypts a sequence of field elements under the provided 16-byte nonce.
    ///
    /// The ciphertext has exactly as many elements as the plaintext; an empty plaintext
    /// yields an empty ciphertext.
    ///
    /// # Errors
    /// Returns an error if the nonce is not exactly 16 bytes.
    pub fn encrypt_raw(&self, plaintext: &[Fp], nonce: &[u8]) -> Result<Vec<Fp>, RescueError> {
        self.apply_keystream(plaintext, nonce, |data, key| data + key)
    }

    /// Decrypts a sequence of field elements under the provided 16-byte nonce.
    ///
    /// # Errors
    /// Returns an error if the nonce is not exactly 16 bytes.
    pub fn decrypt_raw(&self, ciphertext: &[Fp], nonce: &[u8]) -> Result<Vec<Fp>, RescueError> {
        self.apply_keystream(ciphertext, nonce, |data, key| data - key)
    }

    /// Encrypts a sequence of field elements and serializes each ciphertext element into
    /// 32 little-endian bytes.
    ///
    /// # Errors
    /// Returns an error if the nonce is not exactly 16 bytes.
    pub fn encrypt(&self, plaintext: &[Fp], nonce: &[u8]) -> Result<Vec<Vec<u8>>, RescueError> {
        let raw = self.encrypt_raw(plaintext, nonce)?;
        Ok(raw.iter().map(|element| element.to_bytes().to_vec()).collect())
    }

    /// Decrypts a sequence of 32-byte serialized ciphertext elements.
    ///
    /// # Errors
    /// Returns an error if the nonce is not exactly 16 bytes or if any ciphertext element
    /// is not exactly 32 bytes.
    pub fn decrypt(
        &self,
        ciphertext: &[Vec<u8>],
        nonce: &[u8],
    ) -> Result<Vec<Fp>, RescueError> {
        let mut raw = Vec::with_capacity(ciphertext.len());
        for bytes in ciphertext {
            if bytes.len() != Fp::BYTES {
                return Err(RescueError::InvalidArgument(format!(
                    "each ciphertext element must be {} bytes, but got {}",
                    Fp::BYTES,
                    bytes.len()
                )));
            }
            let mut reader = SliceReader::new(bytes);
            let element: Fp = reader.read().map_err(|err| {
                RescueError::InvalidArgument(format!("malformed ciphertext element: {err}"))
            })?;
            raw.push(element);
        }

        self.decrypt_raw(&raw, nonce)
    }

    // HELPERS
    // --------------------------------------------------------------------------------------------

    /// Runs the counter-mode keystream over `data`, combining each element with its
    /// keystream word via `combine`.
    fn apply_keystream(
        &self,
        data: &[Fp],
        nonce: &[u8],
        combine: impl Fn(Fp, Fp) -> Fp,
    ) -> Result<Vec<Fp>, RescueError> {
        if nonce.len() != NONCE_SIZE {
            return Err(RescueError::InvalidArgument(format!(
                "nonce must be {} bytes, but got {}",
                NONCE_SIZE,
                nonce.len()
            )));
        }
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let nonce_value = Fp::new(U256::from_bytes_le(nonce));

        let mut result = Vec::with_capacity(data.len());
        for (block, chunk) in data.chunks(BLOCK_SIZE).enumerate() {
            // counter plaintext for this block: [nonce, block_index, 0, 0, 0]
            let mut counter = vec![Fp::ZERO; BLOCK_SIZE];
            counter[0] = nonce_value;
            counter[1] = Fp::from(block as u64);

            let keystream = self.desc.permute(&Matrix::column(counter))?.to_vector()?;

            for (element, key) in chunk.iter().zip(keystream.iter()) {
                result.push(combine(*element, *key));
            }
        }

        Ok(result)
    }
}

// KEY DERIVATION
// ================================================================================================

/// Derives the 5-element cipher key from a 32-byte shared secret.
///
/// The derivation is the one-step KDF of NIST SP 800-56C (Option 1) instantiated with the
/// Rescue-Prime hash: `key = H(counter || Z || FixedInfo)` with counter = 1, Z = the shared
/// secret as a little-endian field element, and FixedInfo = L = the block size.
fn derive_key(shared_secret: &[u8]) -> Result<Vec<Fp>, RescueError> {
    if shared_secret.len() != SECRET_SIZE {
        return Err(RescueError::InvalidArgument(format!(
            "shared secret must be {} bytes, but got {}",
            SECRET_SIZE,
            shared_secret.len()
        )));
    }

    let hasher = RescueHash::standard()?;

    let secret_value = Fp::new(U256::from_bytes_le(shared_secret));
    let kdf_input = [Fp::ONE, secret_value, Fp::from(BLOCK_SIZE as u64)];

    hasher.digest(&kdf_input)
}

// NONCE GENERATION
// ================================================================================================

/// Generates a fresh 16-byte nonce from the OS entropy source.
///
/// # Errors
/// Returns an error if the OS entropy source is unavailable.
pub fn generate_nonce() -> Result<[u8; NONCE_SIZE], RescueError> {
    random_array::<NONCE_SIZE>()
}
