// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Constant-time arithmetic over two's-complement bit vectors.
//!
//! This module emulates field addition and subtraction with chains of binary full adders over
//! bit vectors of a fixed width. The width is `bin_size = bit_length(p - 1) + 3` bits: one
//! extra bit for the sum of two values, one for the sign, and one for the difference of two
//! negative intermediates. For the Curve25519 base field this is 258 bits.
//!
//! The native [Fp](crate::Fp) operations are already constant-time and produce identical
//! results; this layer exists for compatibility with reference implementations which expose
//! the bit-adder path behind a `constant_time` flag. The matrix element-wise addition and
//! subtraction route through it when the flag is set, and the sponge absorb path always
//! sets it.
//!
//! Bit vectors are little-endian (index 0 holds the least significant bit) and the most
//! significant position acts as the sign bit.

use alloc::vec::Vec;

use crate::uint::U256;

#[cfg(test)]
mod tests;

// CONVERSIONS
// ================================================================================================

/// Returns the bit width used for constant-time operations over values up to `max_value`.
pub fn bin_size(max_value: &U256) -> usize {
    max_value.bit_length() + 3
}

/// Converts a non-negative value into a little-endian bit vector of the specified width.
pub fn to_bits_le(x: &U256, bin_size: usize) -> Vec<bool> {
    (0..bin_size).map(|i| x.bit(i)).collect()
}

/// Converts a little-endian bit vector back into a [U256].
///
/// The vector is interpreted in two's complement: the value must be non-negative (sign bit
/// clear), and set bits at positions 256 and above are rejected.
pub fn from_bits_le(bits: &[bool]) -> U256 {
    debug_assert!(!sign_bit(bits), "bit vector encodes a negative value");

    let mut result = U256::ZERO;
    for (i, bit) in bits.iter().enumerate().take(bits.len() - 1) {
        if *bit {
            debug_assert!(i < U256::BITS, "bit vector wider than 256 significant bits");
            result.set_bit(i);
        }
    }
    result
}

/// Returns the sign bit (the most significant position) of a bit vector.
pub fn sign_bit(bits: &[bool]) -> bool {
    bits[bits.len() - 1]
}

// BIT-VECTOR ARITHMETIC
// ================================================================================================

/// Adds two bit vectors with a chain of full adders.
///
/// Both operands must have the same length; the result wraps at that width.
pub fn adder(x: &[bool], y: &[bool], carry_in: bool) -> Vec<bool> {
    debug_assert_eq!(x.len(), y.len());

    let mut result = Vec::with_capacity(x.len());
    let mut carry = carry_in;

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        // sum bit: x XOR y XOR carry
        let y_xor_carry = yi != carry;
        result.push(xi != y_xor_carry);

        // carry out: majority(x, y, carry)
        carry = yi != (y_xor_carry && (xi != yi));
    }

    result
}

/// Adds two bit vectors (no carry in).
pub fn add(x: &[bool], y: &[bool]) -> Vec<bool> {
    adder(x, y, false)
}

/// Subtracts `y` from `x` as `x + NOT(y) + 1` in two's complement.
pub fn sub(x: &[bool], y: &[bool]) -> Vec<bool> {
    let y_not: Vec<bool> = y.iter().map(|b| !b).collect();
    adder(x, &y_not, true)
}

/// Returns true if `x < y` when both are interpreted as signed two's-complement values.
pub fn lt(x: &[bool], y: &[bool]) -> bool {
    sign_bit(&sub(x, y))
}

/// Constant-time selection: returns `x` if `cond` is true and `y` otherwise.
///
/// Computed as `y + cond * (x - y)`; both the difference and the sum are always evaluated
/// and the scaling is a per-bit mask.
pub fn select(cond: bool, x: &[bool], y: &[bool]) -> Vec<bool> {
    let diff = sub(x, y);
    let scaled: Vec<bool> = diff.iter().map(|b| *b && cond).collect();
    add(y, &scaled)
}

// FIELD WRAPPERS
// ================================================================================================

/// Computes (x + y) mod p over bit vectors.
///
/// Both operands must be in [0, p). The sum is reduced with a conditional subtraction of p
/// selected in constant time.
pub fn field_add(x: &U256, y: &U256, p: &U256, bin_size: usize) -> U256 {
    let x_bits = to_bits_le(x, bin_size);
    let y_bits = to_bits_le(y, bin_size);
    let p_bits = to_bits_le(p, bin_size);

    let sum = add(&x_bits, &y_bits);
    let needs_reduction = !lt(&sum, &p_bits);
    let result = select(needs_reduction, &sub(&sum, &p_bits), &sum);
    from_bits_le(&result)
}

/// Computes (x - y) mod p over bit vectors.
///
/// Both operands must be in [0, p). A negative difference is fixed up with a conditional
/// addition of p selected in constant time.
pub fn field_sub(x: &U256, y: &U256, p: &U256, bin_size: usize) -> U256 {
    let x_bits = to_bits_le(x, bin_size);
    let y_bits = to_bits_le(y, bin_size);
    let p_bits = to_bits_le(p, bin_size);

    let diff = sub(&x_bits, &y_bits);
    let is_negative = sign_bit(&diff);
    let result = select(is_negative, &add(&diff, &p_bits), &diff);
    from_bits_le(&result)
}
