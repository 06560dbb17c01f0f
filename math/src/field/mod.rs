// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Finite field arithmetic.
//!
//! This module contains a single field: the prime field with modulus p = 2<sup>255</sup> - 19,
//! i.e. the base field of Curve25519.

pub mod f25519;
pub use f25519::Fp;
