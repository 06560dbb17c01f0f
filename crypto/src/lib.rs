// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the Rescue family of symmetric primitives over the Curve25519 base
//! field. These include:
//!
//! * **Rescue-Prime hash** - a sponge construction over the Rescue permutation, exposed
//!   through [RescueHash]. The standard instance uses rate 7, capacity 5, and a 5-element
//!   digest.
//! * **Rescue CTR cipher** - a counter-mode stream cipher over the keyed Rescue
//!   permutation, exposed through [RescueCipher], with a one-step SP 800-56C key
//!   derivation from a 32-byte shared secret.
//! * **Parameter derivation** - the [RescueDesc] descriptor elaborates S-box exponents,
//!   round counts, Cauchy MDS matrices, and SHAKE256-derived round constants for both
//!   modes; standard state widths load precomputed MDS tables.
//!
//! All derivation paths are bit-exact with the `@arcium-hq/client` JavaScript reference
//! implementation: field elements serialize as 32 little-endian bytes, nonces as 16
//! little-endian bytes, and the XOF seed strings and 48-byte wide reduction match the
//! reference byte for byte.

pub mod rescue;
pub use rescue::{
    cipher::{generate_nonce, RescueCipher, BLOCK_SIZE, NONCE_SIZE, SECRET_SIZE},
    hash::RescueHash,
    RescueDesc, RescueMode,
};

pub mod random;
pub mod xof;
pub use xof::Shake256Xof;

mod errors;
pub use errors::RescueError;
