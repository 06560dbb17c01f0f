// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the Rescue family of symmetric primitives over the prime field with
//! modulus p = 2<sup>255</sup> - 19 (the Curve25519 base field): the Rescue-Prime sponge
//! hash and a Rescue-based stream cipher in counter mode.
//!
//! The primitives operate natively on field elements, which makes them suited for
//! arithmetization-heavy applications - zero-knowledge proof pipelines, commitment schemes,
//! and protocols that hash or encrypt field-valued data. All parameter derivation and all
//! wire formats are bit-exact with the `@arcium-hq/client` JavaScript reference
//! implementation.
//!
//! ## Hashing
//!
//! ```
//! use rescue25519::{Fp, RescueHash};
//!
//! let hasher = RescueHash::standard()?;
//! let digest = hasher.digest(&[Fp::from(1u64), Fp::from(2u64)])?;
//! assert_eq!(5, digest.len());
//! # Ok::<(), rescue25519::RescueError>(())
//! ```
//!
//! ## Encryption
//!
//! ```
//! use rescue25519::{generate_nonce, Fp, RescueCipher};
//!
//! let shared_secret = [7u8; 32];
//! let cipher = RescueCipher::new(&shared_secret)?;
//!
//! let nonce = generate_nonce()?;
//! let plaintext = vec![Fp::from(1u64), Fp::from(2u64), Fp::from(3u64)];
//!
//! let ciphertext = cipher.encrypt_raw(&plaintext, &nonce)?;
//! assert_eq!(plaintext, cipher.decrypt_raw(&ciphertext, &nonce)?);
//! # Ok::<(), rescue25519::RescueError>(())
//! ```
//!
//! The cipher provides no authentication: decrypting with a wrong key or nonce silently
//! yields garbage, and nonce reuse leaks plaintext differences. Callers that need
//! authenticity must layer a MAC on top.

pub use crypto::{
    generate_nonce, random, rescue, xof, RescueCipher, RescueDesc, RescueError, RescueHash,
    RescueMode, Shake256Xof, BLOCK_SIZE, NONCE_SIZE, SECRET_SIZE,
};
pub use math::{ct, Fp, Matrix, U256, U512};
pub use utils::{ByteReader, ByteWriter, Deserializable, Serializable, SliceReader};

// TESTS
// ================================================================================================
