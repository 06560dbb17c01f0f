// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! 256-bit unsigned integers with explicit carries and wide multiplication.
//!
//! Values are stored as 4 x 64-bit limbs in little-endian limb order:
//! value = limbs\[0\] + limbs\[1\] * 2<sup>64</sup> + limbs\[2\] * 2<sup>128</sup> +
//! limbs\[3\] * 2<sup>192</sup>. No arithmetic here is modular; reduction happens at the
//! field layer.

use core::{
    fmt::{Debug, Display, Formatter, LowerHex},
    ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub},
};

use utils::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Randomizable, Serializable,
};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

/// Number of 64-bit limbs in a [U256].
const LIMBS: usize = 4;

/// Number of bytes in the canonical encoding of a [U256].
const BYTES: usize = 32;

// U256
// ================================================================================================

/// A 256-bit unsigned integer stored as 4 x 64-bit little-endian limbs.
#[derive(Copy, Clone, Eq, Default)]
pub struct U256([u64; LIMBS]);

impl U256 {
    /// Number of 64-bit limbs.
    pub const LIMBS: usize = LIMBS;

    /// Number of bytes in the canonical little-endian encoding.
    pub const BYTES: usize = BYTES;

    /// Number of bits.
    pub const BITS: usize = 256;

    /// The value 0.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// The value 1.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// The maximum representable value (all bits set).
    pub const MAX: Self = Self([u64::MAX; LIMBS]);

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a new 256-bit integer from the provided limbs (little-endian limb order).
    pub const fn new(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    /// Creates a new 256-bit integer from a 64-bit value.
    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    /// Creates a new 256-bit integer from up to 32 little-endian bytes.
    ///
    /// If fewer than 32 bytes are provided, the missing high-order bytes are taken to be zero;
    /// bytes beyond the first 32 are ignored.
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        let mut limbs = [0u64; LIMBS];
        for (i, byte) in bytes.iter().take(BYTES).enumerate() {
            limbs[i / 8] |= (*byte as u64) << ((i % 8) * 8);
        }
        Self(limbs)
    }

    /// Parses a 256-bit integer from a hexadecimal string with an optional "0x" prefix.
    ///
    /// # Errors
    /// Returns an error if the string contains a non-hex character or encodes a value wider
    /// than 256 bits.
    pub fn from_hex(hex: &str) -> Result<Self, DeserializationError> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        if digits.is_empty() || digits.len() > BYTES * 2 {
            return Err(DeserializationError::InvalidValue(format!(
                "expected between 1 and 64 hex digits, but got {}",
                digits.len()
            )));
        }
        let mut result = Self::ZERO;
        for c in digits.chars() {
            let digit = c.to_digit(16).ok_or_else(|| {
                DeserializationError::InvalidValue(format!("invalid hex character: {c}"))
            })?;
            result = (result << 4) | Self::from_u64(digit as u64);
        }
        Ok(result)
    }

    // ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the limb at the specified index (0 = least significant).
    pub const fn limb(&self, i: usize) -> u64 {
        self.0[i]
    }

    /// Returns the underlying limb array (little-endian limb order).
    pub const fn limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    /// Returns true if this value is zero.
    pub const fn is_zero(&self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
    }

    /// Returns true if this value is one.
    pub const fn is_one(&self) -> bool {
        self.0[0] == 1 && (self.0[1] | self.0[2] | self.0[3]) == 0
    }

    /// Returns the bit at the specified position (0 = least significant); positions at or
    /// beyond 256 read as zero.
    pub const fn bit(&self, pos: usize) -> bool {
        if pos >= Self::BITS {
            return false;
        }
        (self.0[pos / 64] >> (pos % 64)) & 1 == 1
    }

    /// Sets the bit at the specified position; positions at or beyond 256 are ignored.
    pub fn set_bit(&mut self, pos: usize) {
        if pos < Self::BITS {
            self.0[pos / 64] |= 1u64 << (pos % 64);
        }
    }

    /// Clears the bit at the specified position; positions at or beyond 256 are ignored.
    pub fn clear_bit(&mut self, pos: usize) {
        if pos < Self::BITS {
            self.0[pos / 64] &= !(1u64 << (pos % 64));
        }
    }

    /// Returns the number of significant bits (the position of the highest set bit plus one);
    /// zero has bit length 0.
    pub const fn bit_length(&self) -> usize {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.0[i] != 0 {
                return i * 64 + (64 - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    // ARITHMETIC
    // --------------------------------------------------------------------------------------------

    /// Adds two values, returning the 256-bit result and the carry-out flag.
    ///
    /// The carry chain is evaluated for every limb regardless of the operand values.
    pub const fn add_with_carry(a: &Self, b: &Self) -> (Self, bool) {
        let mut result = [0u64; LIMBS];
        let mut carry = 0u64;
        let mut i = 0;
        while i < LIMBS {
            let sum = (a.0[i] as u128) + (b.0[i] as u128) + (carry as u128);
            result[i] = sum as u64;
            carry = (sum >> 64) as u64;
            i += 1;
        }
        (Self(result), carry != 0)
    }

    /// Subtracts `b` from `a`, returning the 256-bit result and the borrow-out flag.
    ///
    /// The borrow chain is evaluated for every limb regardless of the operand values.
    pub const fn sub_with_borrow(a: &Self, b: &Self) -> (Self, bool) {
        let mut result = [0u64; LIMBS];
        let mut borrow = 0u64;
        let mut i = 0;
        while i < LIMBS {
            let diff = (a.0[i] as u128)
                .wrapping_sub(b.0[i] as u128)
                .wrapping_sub(borrow as u128);
            result[i] = diff as u64;
            borrow = ((diff >> 64) as u64) & 1;
            i += 1;
        }
        (Self(result), borrow != 0)
    }

    /// Multiplies two 256-bit values into a 512-bit result.
    pub fn mul_wide(&self, rhs: &Self) -> U512 {
        #[cfg(not(target_pointer_width = "32"))]
        return mul_wide_native(self, rhs);
        #[cfg(target_pointer_width = "32")]
        return mul_wide_portable(self, rhs);
    }

    /// Squares a 256-bit value into a 512-bit result.
    ///
    /// Off-diagonal products are computed once, doubled, and then combined with the diagonal
    /// squares.
    pub fn sqr_wide(&self) -> U512 {
        #[cfg(not(target_pointer_width = "32"))]
        return sqr_wide_native(self);
        #[cfg(target_pointer_width = "32")]
        return mul_wide_portable(self, self);
    }

    // SERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Serializes this value into 32 little-endian bytes.
    pub fn to_bytes_le(&self) -> [u8; BYTES] {
        let mut result = [0u8; BYTES];
        for (i, limb) in self.0.iter().enumerate() {
            result[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
        }
        result
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for U256 {
    type Output = Self;

    /// Adds two values, wrapping on overflow.
    fn add(self, rhs: Self) -> Self {
        Self::add_with_carry(&self, &rhs).0
    }
}

impl Sub for U256 {
    type Output = Self;

    /// Subtracts two values, wrapping on underflow.
    fn sub(self, rhs: Self) -> Self {
        Self::sub_with_borrow(&self, &rhs).0
    }
}

impl BitAnd for U256 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self([
            self.0[0] & rhs.0[0],
            self.0[1] & rhs.0[1],
            self.0[2] & rhs.0[2],
            self.0[3] & rhs.0[3],
        ])
    }
}

impl BitOr for U256 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self([
            self.0[0] | rhs.0[0],
            self.0[1] | rhs.0[1],
            self.0[2] | rhs.0[2],
            self.0[3] | rhs.0[3],
        ])
    }
}

impl BitXor for U256 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self([
            self.0[0] ^ rhs.0[0],
            self.0[1] ^ rhs.0[1],
            self.0[2] ^ rhs.0[2],
            self.0[3] ^ rhs.0[3],
        ])
    }
}

impl Not for U256 {
    type Output = Self;

    fn not(self) -> Self {
        Self([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }
}

impl Shl<usize> for U256 {
    type Output = Self;

    /// Shifts left by `n` bits; shifts of 256 or more yield zero.
    fn shl(self, n: usize) -> Self {
        if n >= Self::BITS {
            return Self::ZERO;
        }
        if n == 0 {
            return self;
        }

        let mut result = [0u64; LIMBS];
        let limb_shift = n / 64;
        let bit_shift = n % 64;

        for i in limb_shift..LIMBS {
            result[i] = self.0[i - limb_shift] << bit_shift;
            if bit_shift > 0 && i > limb_shift {
                result[i] |= self.0[i - limb_shift - 1] >> (64 - bit_shift);
            }
        }

        Self(result)
    }
}

impl Shr<usize> for U256 {
    type Output = Self;

    /// Shifts right by `n` bits; shifts of 256 or more yield zero.
    fn shr(self, n: usize) -> Self {
        if n >= Self::BITS {
            return Self::ZERO;
        }
        if n == 0 {
            return self;
        }

        let mut result = [0u64; LIMBS];
        let limb_shift = n / 64;
        let bit_shift = n % 64;

        for i in 0..LIMBS - limb_shift {
            result[i] = self.0[i + limb_shift] >> bit_shift;
            if bit_shift > 0 && i + limb_shift + 1 < LIMBS {
                result[i] |= self.0[i + limb_shift + 1] << (64 - bit_shift);
            }
        }

        Self(result)
    }
}

// COMPARISONS
// ================================================================================================

impl PartialEq for U256 {
    /// Equality without early exit: limb differences are ORed together and tested once.
    fn eq(&self, other: &Self) -> bool {
        let mut diff = 0u64;
        diff |= self.0[0] ^ other.0[0];
        diff |= self.0[1] ^ other.0[1];
        diff |= self.0[2] ^ other.0[2];
        diff |= self.0[3] ^ other.0[3];
        diff == 0
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        for i in (0..LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                core::cmp::Ordering::Equal => continue,
                ord => return ord,
            }
        }
        core::cmp::Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }
}

// FORMATTING
// ================================================================================================

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for limb in self.0.iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

impl Display for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{self:x}")
    }
}

impl Debug for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for U256 {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.to_bytes_le());
    }

    fn get_size_hint(&self) -> usize {
        BYTES
    }
}

impl Deserializable for U256 {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let bytes = source.read_array::<BYTES>()?;
        Ok(Self::from_bytes_le(&bytes))
    }
}

impl Randomizable for U256 {
    const VALUE_SIZE: usize = BYTES;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        if source.len() < BYTES {
            return None;
        }
        Some(Self::from_bytes_le(source))
    }
}

// U512
// ================================================================================================

/// A 512-bit unsigned integer used as the intermediate result of wide multiplication.
///
/// Stored as 8 x 64-bit limbs in little-endian limb order.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct U512([u64; 2 * LIMBS]);

impl U512 {
    /// Number of 64-bit limbs.
    pub const LIMBS: usize = 2 * LIMBS;

    /// The value 0.
    pub const ZERO: Self = Self([0; 2 * LIMBS]);

    /// Creates a new 512-bit integer from the provided limbs (little-endian limb order).
    pub const fn new(limbs: [u64; 2 * LIMBS]) -> Self {
        Self(limbs)
    }

    /// Creates a new 512-bit integer from up to 64 little-endian bytes.
    ///
    /// If fewer than 64 bytes are provided, the missing high-order bytes are taken to be
    /// zero; bytes beyond the first 64 are ignored.
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        let mut limbs = [0u64; 2 * LIMBS];
        for (i, byte) in bytes.iter().take(2 * BYTES).enumerate() {
            limbs[i / 8] |= (*byte as u64) << ((i % 8) * 8);
        }
        Self(limbs)
    }

    /// Returns the limb at the specified index (0 = least significant).
    pub const fn limb(&self, i: usize) -> u64 {
        self.0[i]
    }

    /// Returns the low 256 bits.
    pub const fn low(&self) -> U256 {
        U256([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the high 256 bits.
    pub const fn high(&self) -> U256 {
        U256([self.0[4], self.0[5], self.0[6], self.0[7]])
    }
}

// WIDE MULTIPLICATION
// ================================================================================================

/// Schoolbook 4x4 limb multiplication over 128-bit intermediates.
#[cfg_attr(target_pointer_width = "32", allow(dead_code))]
fn mul_wide_native(a: &U256, b: &U256) -> U512 {
    let mut result = [0u64; 2 * LIMBS];

    for i in 0..LIMBS {
        let mut carry = 0u128;
        for j in 0..LIMBS {
            let prod = (a.0[i] as u128) * (b.0[j] as u128) + (result[i + j] as u128) + carry;
            result[i + j] = prod as u64;
            carry = prod >> 64;
        }
        result[i + LIMBS] = carry as u64;
    }

    U512(result)
}

/// Schoolbook squaring over 128-bit intermediates.
///
/// Cross products a\[i\] * a\[j\] with i < j are computed once, the accumulated result is
/// doubled, and the diagonal squares a\[i\]<sup>2</sup> are added in a final pass.
#[cfg_attr(target_pointer_width = "32", allow(dead_code))]
fn sqr_wide_native(a: &U256) -> U512 {
    let mut result = [0u64; 2 * LIMBS];

    // off-diagonal products, each computed once
    for i in 0..LIMBS {
        let mut carry = 0u128;
        for j in (i + 1)..LIMBS {
            let prod = (a.0[i] as u128) * (a.0[j] as u128) + (result[i + j] as u128) + carry;
            result[i + j] = prod as u64;
            carry = prod >> 64;
        }
        result[i + LIMBS] = carry as u64;
    }

    // double the cross products
    let mut carry = 0u64;
    for limb in result.iter_mut().skip(1) {
        let doubled = ((*limb as u128) << 1) + (carry as u128);
        *limb = doubled as u64;
        carry = (doubled >> 64) as u64;
    }

    // add the diagonal squares
    let mut carry = 0u128;
    for i in 0..LIMBS {
        let sq = (a.0[i] as u128) * (a.0[i] as u128);

        let sum = (result[2 * i] as u128) + (sq as u64 as u128) + carry;
        result[2 * i] = sum as u64;
        carry = sum >> 64;

        let sum = (result[2 * i + 1] as u128) + (sq >> 64) + carry;
        result[2 * i + 1] = sum as u64;
        carry = sum >> 64;
    }

    U512(result)
}

/// Portable schoolbook multiplication over 32-bit half-limbs; used on targets without
/// efficient 128-bit arithmetic.
#[cfg_attr(not(target_pointer_width = "32"), allow(dead_code))]
fn mul_wide_portable(a: &U256, b: &U256) -> U512 {
    let mut a32 = [0u32; 2 * LIMBS];
    let mut b32 = [0u32; 2 * LIMBS];
    for i in 0..LIMBS {
        a32[i * 2] = a.0[i] as u32;
        a32[i * 2 + 1] = (a.0[i] >> 32) as u32;
        b32[i * 2] = b.0[i] as u32;
        b32[i * 2 + 1] = (b.0[i] >> 32) as u32;
    }

    let mut temp = [0u64; 4 * LIMBS];
    for i in 0..2 * LIMBS {
        let mut carry = 0u64;
        for j in 0..2 * LIMBS {
            let prod = (a32[i] as u64) * (b32[j] as u64) + temp[i + j] + carry;
            temp[i + j] = prod & 0xFFFF_FFFF;
            carry = prod >> 32;
        }
        temp[i + 2 * LIMBS] += carry;
    }

    let mut result = [0u64; 2 * LIMBS];
    for i in 0..2 * LIMBS {
        result[i] = temp[i * 2] | (temp[i * 2 + 1] << 32);
    }

    U512(result)
}

