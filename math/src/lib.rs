// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the arithmetic kernel used by the Rescue primitive suite.
//!
//! The kernel consists of three layers:
//!
//! * **256-bit integers** - the [U256] type provides plain (non-modular) 256-bit arithmetic
//!   with explicit carries, together with the 512-bit [U512] type produced by wide
//!   multiplication.
//! * **Field arithmetic** - the [Fp] type implements the prime field with modulus
//!   p = 2<sup>255</sup> - 19 (the Curve25519 base field). All operations are constant-time
//!   by construction: conditional work is done via masked selects and the exponentiation
//!   uses a Montgomery ladder.
//! * **Linear algebra** - the [Matrix] type implements dense matrices over [Fp] with the
//!   operations needed by the Rescue permutation (matrix multiplication, element-wise
//!   addition/subtraction/power, determinant, transpose).
//!
//! In addition, the [ct] module provides an alternative constant-time implementation of
//! field addition and subtraction built from binary full-adder chains. It exists for
//! compatibility with reference implementations which emulate arithmetic over bit vectors;
//! the matrix `constant_time` flag routes element-wise addition and subtraction through it.

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate alloc;

pub mod ct;
pub mod uint;
pub use uint::{U256, U512};

pub mod field;
pub use field::Fp;

pub mod matrix;
pub use matrix::Matrix;

mod errors;
pub use errors::{FieldError, MatrixError};
