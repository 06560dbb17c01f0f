// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the prime field with modulus $p = 2^{255} - 19$ (the Curve25519 base
//! field).
//!
//! Elements are stored in canonical form in the range [0, p) with a [U256] as the backing
//! type. Reduction exploits $2^{256} \equiv 38 \pmod p$: a 512-bit product $hi \cdot 2^{256}
//! + lo$ is folded as $lo + 38 \cdot hi$ followed by at most two conditional subtractions
//! of p.
//!
//! All operations are constant-time by construction: conditional subtractions and additions
//! are performed via masked selects, exponentiation uses a Montgomery ladder which executes
//! the same multiplication/squaring schedule for every exponent bit, and inversion follows a
//! fixed addition chain.

use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use utils::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Randomizable, Serializable,
};

use crate::{
    errors::FieldError,
    uint::{U256, U512},
};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

// Field modulus p = 2^255 - 19
const M: U256 = U256::new([
    0xffffffffffffffed,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x7fffffffffffffff,
]);

// Number of bytes needed to represent a field element
const ELEMENT_BYTES: usize = 32;

// FIELD ELEMENT
// ================================================================================================

/// Represents an element of the field with modulus $p = 2^{255} - 19$.
///
/// Internal values are stored in their canonical form in the range [0, p). The backing type
/// is [U256].
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct Fp(U256);

impl Fp {
    /// The field modulus p = 2^255 - 19.
    pub const MODULUS: U256 = M;

    /// Number of bits in the field modulus.
    pub const BITS: usize = 255;

    /// Number of bytes in the canonical little-endian encoding of an element.
    pub const BYTES: usize = ELEMENT_BYTES;

    /// The additive identity.
    pub const ZERO: Self = Self(U256::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Self(U256::ONE);

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a new field element from a [U256] value. If the value is greater than or equal
    /// to the field modulus, modular reduction is silently performed.
    pub fn new(value: U256) -> Self {
        Self(reduce_full(value))
    }

    /// Creates a new field element directly from the provided limbs (little-endian limb
    /// order) without reduction.
    ///
    /// The caller must guarantee that the encoded value is smaller than the field modulus;
    /// this constructor exists to initialize compile-time constants.
    pub const fn from_raw(limbs: [u64; 4]) -> Self {
        Self(U256::new(limbs))
    }

    /// Creates a new field element from up to 32 little-endian bytes, reducing modulo p.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(U256::from_bytes_le(bytes))
    }

    /// Creates a new field element from up to 64 little-endian bytes, reducing the encoded
    /// wide value modulo p.
    ///
    /// The value $hi \cdot 2^{256} + lo$ is folded as $lo + 38 \cdot hi$ before the final
    /// reduction, which matches a plain `mod p` of the wide integer. This is the reduction
    /// applied to the 48-byte chunks produced during round-constant sampling.
    pub fn from_wide_bytes(bytes: &[u8]) -> Self {
        Self(reduce_512(&U512::from_bytes_le(bytes)))
    }

    // ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the canonical value of this element as a [U256].
    pub const fn value(&self) -> &U256 {
        &self.0
    }

    /// Returns true if this element is zero.
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if this element is one.
    pub const fn is_one(&self) -> bool {
        self.0.is_one()
    }

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this element squared.
    pub fn square(self) -> Self {
        Self(sqr(&self.0))
    }

    /// Returns this element raised to the power of 5.
    ///
    /// This is the S-box exponent of the Rescue permutation over this field; the chain costs
    /// two squarings and one multiplication.
    pub fn pow5(self) -> Self {
        let a2 = sqr(&self.0);
        let a4 = sqr(&a2);
        Self(mul(&a4, &self.0))
    }

    /// Returns this element raised to the power of `exp`.
    ///
    /// The exponentiation is performed with a Montgomery ladder over exactly 255 exponent
    /// bits: every iteration computes one multiplication and two squarings and selects the
    /// ladder registers via masks, so the operation schedule does not depend on the exponent.
    pub fn pow(self, exp: &U256) -> Self {
        let mut r0 = U256::ONE;
        let mut r1 = self.0;

        // values in the field fit into 255 bits, so start from bit 254
        for i in (0..=254).rev() {
            let bit = exp.bit(i);

            let r0r1 = mul(&r0, &r1);
            let r0_sqr = sqr(&r0);
            let r1_sqr = sqr(&r1);

            // bit = 0: r0 <- r0^2,   r1 <- r0 * r1
            // bit = 1: r0 <- r0 * r1, r1 <- r1^2
            r0 = ct_select(bit, &r0r1, &r0_sqr);
            r1 = ct_select(bit, &r1_sqr, &r0r1);
        }

        Self(r0)
    }

    /// Returns the multiplicative inverse of this element computed as $a^{p - 2}$ via a fixed
    /// addition chain.
    ///
    /// # Errors
    /// Returns an error if this element is zero.
    pub fn inv(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(Self(inv(&self.0)))
    }

    // CONSTANT-TIME COMPARISONS
    // --------------------------------------------------------------------------------------------

    /// Constant-time equality check: limb differences are ORed together and tested once.
    pub fn ct_eq(&self, rhs: &Self) -> bool {
        let mut diff = 0u64;
        diff |= self.0.limb(0) ^ rhs.0.limb(0);
        diff |= self.0.limb(1) ^ rhs.0.limb(1);
        diff |= self.0.limb(2) ^ rhs.0.limb(2);
        diff |= self.0.limb(3) ^ rhs.0.limb(3);
        diff == 0
    }

    /// Constant-time less-than check derived from the borrow flag of a full subtraction.
    pub fn ct_less_than(&self, rhs: &Self) -> bool {
        U256::sub_with_borrow(&self.0, &rhs.0).1
    }

    // SERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Serializes this element into 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; ELEMENT_BYTES] {
        self.0.to_bytes_le()
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for Fp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(add(&self.0, &rhs.0))
    }
}

impl AddAssign for Fp {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(sub(&self.0, &rhs.0))
    }
}

impl SubAssign for Fp {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Fp {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mul(&self.0, &rhs.0))
    }
}

impl MulAssign for Fp {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Fp {
    type Output = Self;

    fn neg(self) -> Self {
        Self(neg(&self.0))
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u64> for Fp {
    /// Converts a 64-bit value into a field element.
    fn from(value: u64) -> Self {
        Self(U256::from_u64(value))
    }
}

impl From<u32> for Fp {
    /// Converts a 32-bit value into a field element.
    fn from(value: u32) -> Self {
        Self(U256::from_u64(value as u64))
    }
}

impl From<u128> for Fp {
    /// Converts a 128-bit value into a field element.
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Fp {
    /// Converts a 256-bit value into a field element, reducing modulo p.
    fn from(value: U256) -> Self {
        Self::new(value)
    }
}

// FORMATTING
// ================================================================================================

impl Display for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for Fp {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.to_bytes());
    }

    fn get_size_hint(&self) -> usize {
        ELEMENT_BYTES
    }
}

impl Deserializable for Fp {
    /// Reads 32 little-endian bytes and reduces the encoded value modulo p. Values greater
    /// than or equal to the modulus are accepted and silently reduced; consumers which need
    /// canonical encodings must validate separately.
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let bytes = source.read_array::<ELEMENT_BYTES>()?;
        Ok(Self::from_bytes(&bytes))
    }
}

impl Randomizable for Fp {
    const VALUE_SIZE: usize = ELEMENT_BYTES;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        if source.len() < ELEMENT_BYTES {
            return None;
        }
        let value = U256::from_bytes_le(&source[..ELEMENT_BYTES]);
        if value >= M {
            return None;
        }
        Some(Self(value))
    }
}

// FINITE FIELD ARITHMETIC
// ================================================================================================

/// Reduces a value in [0, 2p) into [0, p) with a single masked subtraction.
fn reduce_once(x: U256) -> U256 {
    let (diff, borrow) = U256::sub_with_borrow(&x, &M);

    // borrow = 1 means x < p, keep x; borrow = 0 means x >= p, keep the difference
    ct_select(borrow, &x, &diff)
}

/// Reduces an arbitrary 256-bit value into [0, p).
fn reduce_full(x: U256) -> U256 {
    // any 256-bit value is smaller than 3p, so two conditional subtractions suffice
    reduce_once(reduce_once(x))
}

/// Computes (a + b) mod p; a and b are assumed to be valid field elements.
fn add(a: &U256, b: &U256) -> U256 {
    let (sum, carry) = U256::add_with_carry(a, b);
    let (diff, borrow) = U256::sub_with_borrow(&sum, &M);

    // subtract p when the sum wrapped past 2^256 or did not drop below p
    let use_diff = carry || !borrow;
    ct_select(use_diff, &diff, &sum)
}

/// Computes (a - b) mod p; a and b are assumed to be valid field elements.
fn sub(a: &U256, b: &U256) -> U256 {
    let (diff, borrow) = U256::sub_with_borrow(a, b);
    let (sum, _) = U256::add_with_carry(&diff, &M);

    ct_select(borrow, &sum, &diff)
}

/// Computes (-a) mod p; a is assumed to be a valid field element.
fn neg(a: &U256) -> U256 {
    let (diff, _) = U256::sub_with_borrow(&M, a);

    // mask the result to zero when a is zero
    let mask = (a.is_zero() as u64).wrapping_sub(1);
    U256::new([
        diff.limb(0) & mask,
        diff.limb(1) & mask,
        diff.limb(2) & mask,
        diff.limb(3) & mask,
    ])
}

/// Computes (a * b) mod p.
fn mul(a: &U256, b: &U256) -> U256 {
    reduce_512(&a.mul_wide(b))
}

/// Computes a^2 mod p.
fn sqr(a: &U256) -> U256 {
    reduce_512(&a.sqr_wide())
}

/// Reduces a 512-bit value modulo p using $2^{256} \equiv 38 \pmod p$.
///
/// The result of `lo + 38 * hi` can exceed 256 bits by a few bits; the excess carry is folded
/// back in (as `carry * 38`) with masked additions before the final conditional subtractions.
fn reduce_512(x: &U512) -> U256 {
    let low = x.low();
    let high = x.high();

    // result = low + 38 * high, with carry-out accumulated in `carry`
    let mut result = [0u64; 4];
    let mut carry = 0u128;
    for i in 0..4 {
        let prod = (high.limb(i) as u128) * 38 + (low.limb(i) as u128) + carry;
        result[i] = prod as u64;
        carry = prod >> 64;
    }
    let result = U256::new(result);

    // fold the carry back in: carry * 2^256 = carry * 38 (mod p); carry fits into 6 bits
    let extra = (carry as u64) * 38;
    let (result, c) = U256::add_with_carry(&result, &U256::from_u64(extra));

    // a wrap past 2^256 contributes another 38, added under a mask
    let overflow_mask = (c as u64).wrapping_neg();
    let (result, c2) = U256::add_with_carry(&result, &U256::from_u64(38 & overflow_mask));

    // a second wrap cannot occur for inputs produced by wide multiplication, but the masked
    // addition keeps the operation schedule fixed
    let overflow_mask2 = (c2 as u64).wrapping_neg();
    let mut limbs = *result.limbs();
    limbs[0] = limbs[0].wrapping_add(38 & overflow_mask2);

    reduce_full(U256::new(limbs))
}

/// Computes a^(p-2) mod p via a fixed addition chain; returns 0 for a = 0.
///
/// The chain builds $a^{2^n - 1}$ for n in {2, 4, 5, 10, 20, 40, 50, 100, 200, 250} and
/// combines the result with $a^{11}$ to reach $a^{2^{255} - 21}$.
fn inv(a: &U256) -> U256 {
    // a^(2^2 - 1) = a^3
    let t0 = mul(&sqr(a), a);

    // a^(2^4 - 1) = a^15
    let t1 = mul(&sqr(&sqr(&t0)), &t0);

    // a^(2^5 - 1) = a^31
    let t2 = mul(&sqr(&t1), a);

    // a^(2^10 - 1)
    let mut t3 = t2;
    for _ in 0..5 {
        t3 = sqr(&t3);
    }
    let t3 = mul(&t3, &t2);

    // a^(2^20 - 1)
    let mut t4 = t3;
    for _ in 0..10 {
        t4 = sqr(&t4);
    }
    let t4 = mul(&t4, &t3);

    // a^(2^40 - 1)
    let mut t5 = t4;
    for _ in 0..20 {
        t5 = sqr(&t5);
    }
    let t5 = mul(&t5, &t4);

    // a^(2^50 - 1)
    let mut t6 = t5;
    for _ in 0..10 {
        t6 = sqr(&t6);
    }
    let t6 = mul(&t6, &t3);

    // a^(2^100 - 1)
    let mut t7 = t6;
    for _ in 0..50 {
        t7 = sqr(&t7);
    }
    let t7 = mul(&t7, &t6);

    // a^(2^200 - 1)
    let mut t8 = t7;
    for _ in 0..100 {
        t8 = sqr(&t8);
    }
    let t8 = mul(&t8, &t7);

    // a^(2^250 - 1)
    let mut t9 = t8;
    for _ in 0..50 {
        t9 = sqr(&t9);
    }
    let t9 = mul(&t9, &t6);

    // a^(2^255 - 32)
    let mut t10 = t9;
    for _ in 0..5 {
        t10 = sqr(&t10);
    }

    // a^11 = a^8 * a^3
    let a2 = sqr(a);
    let a3 = mul(&a2, a);
    let a8 = sqr(&sqr(&a2));
    let a11 = mul(&a8, &a3);

    // a^(2^255 - 21) = a^(2^255 - 32) * a^11
    mul(&t10, &a11)
}

/// Constant-time selection: returns `a` if `cond` is true and `b` otherwise.
fn ct_select(cond: bool, a: &U256, b: &U256) -> U256 {
    // cond = true -> mask = ~0; cond = false -> mask = 0
    let mask = (cond as u64).wrapping_neg();

    U256::new([
        (b.limb(0) & !mask) | (a.limb(0) & mask),
        (b.limb(1) & !mask) | (a.limb(1) & mask),
        (b.limb(2) & !mask) | (a.limb(2) & mask),
        (b.limb(3) & !mask) | (a.limb(3) & mask),
    ])
}
