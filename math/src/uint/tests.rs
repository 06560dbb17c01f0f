// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use num_bigint::BigUint;
use proptest::prelude::*;
use rand_utils::rand_value;

use super::{mul_wide_portable, U256, U512};

// HELPERS
// ================================================================================================

fn to_big(value: &U256) -> BigUint {
    BigUint::from_bytes_le(&value.to_bytes_le())
}

fn big_512(value: &U512) -> BigUint {
    (BigUint::from_bytes_le(&value.high().to_bytes_le()) << 256)
        + BigUint::from_bytes_le(&value.low().to_bytes_le())
}

// BASIC ARITHMETIC
// ================================================================================================

#[test]
fn add_with_carry() {
    // no carry
    let (sum, carry) = U256::add_with_carry(&U256::from_u64(2), &U256::from_u64(3));
    assert_eq!(U256::from_u64(5), sum);
    assert!(!carry);

    // carry propagates through all limbs
    let (sum, carry) = U256::add_with_carry(&U256::MAX, &U256::ONE);
    assert_eq!(U256::ZERO, sum);
    assert!(carry);

    // random values against arbitrary precision
    for _ in 0..100 {
        let a: U256 = rand_value();
        let b: U256 = rand_value();
        let (sum, carry) = U256::add_with_carry(&a, &b);
        let expected = to_big(&a) + to_big(&b);
        let reduced = &expected % (BigUint::from(1u8) << 256);
        assert_eq!(reduced, to_big(&sum));
        assert_eq!(expected >= (BigUint::from(1u8) << 256), carry);
    }
}

#[test]
fn sub_with_borrow() {
    // no borrow
    let (diff, borrow) = U256::sub_with_borrow(&U256::from_u64(5), &U256::from_u64(3));
    assert_eq!(U256::from_u64(2), diff);
    assert!(!borrow);

    // borrow propagates through all limbs
    let (diff, borrow) = U256::sub_with_borrow(&U256::ZERO, &U256::ONE);
    assert_eq!(U256::MAX, diff);
    assert!(borrow);

    // random values: a - b + b == a
    for _ in 0..100 {
        let a: U256 = rand_value();
        let b: U256 = rand_value();
        assert_eq!(a, (a - b) + b);
    }
}

#[test]
fn mul_wide() {
    // identities
    let a: U256 = rand_value();
    assert_eq!(U512::ZERO, a.mul_wide(&U256::ZERO));
    assert_eq!(to_big(&a), big_512(&a.mul_wide(&U256::ONE)));

    // maximum operands
    let max_sq = U256::MAX.mul_wide(&U256::MAX);
    let expected = (&(BigUint::from(1u8) << 256) - 1u8) * (&(BigUint::from(1u8) << 256) - 1u8);
    assert_eq!(expected, big_512(&max_sq));

    // random values against arbitrary precision
    for _ in 0..100 {
        let a: U256 = rand_value();
        let b: U256 = rand_value();
        assert_eq!(to_big(&a) * to_big(&b), big_512(&a.mul_wide(&b)));
    }
}

#[test]
fn sqr_wide() {
    for _ in 0..100 {
        let a: U256 = rand_value();
        assert_eq!(a.mul_wide(&a), a.sqr_wide());
    }
}

#[test]
fn mul_wide_portable_matches_native() {
    let cases = [U256::ZERO, U256::ONE, U256::MAX];
    for a in cases {
        for b in cases {
            assert_eq!(a.mul_wide(&b), mul_wide_portable(&a, &b));
        }
    }

    for _ in 0..100 {
        let a: U256 = rand_value();
        let b: U256 = rand_value();
        assert_eq!(a.mul_wide(&b), mul_wide_portable(&a, &b));
    }
}

// BIT OPERATIONS
// ================================================================================================

#[test]
fn shifts() {
    let a = U256::from_u64(1);
    assert_eq!(U256::new([0, 1, 0, 0]), a << 64);
    assert_eq!(U256::new([0, 0, 0, 0x8000000000000000]), a << 255);
    assert_eq!(U256::ZERO, a << 256);

    let b = U256::new([0, 0, 0, 0x8000000000000000]);
    assert_eq!(U256::ONE, b >> 255);
    assert_eq!(U256::ZERO, b >> 256);

    // right shift against arbitrary precision
    for _ in 0..100 {
        let v: U256 = rand_value();
        let n = rand_value::<u64>() as usize % 256;
        assert_eq!(to_big(&v) >> n, to_big(&(v >> n)));
    }
}

#[test]
fn bit_access() {
    let mut a = U256::ZERO;
    a.set_bit(0);
    a.set_bit(64);
    a.set_bit(255);
    assert!(a.bit(0));
    assert!(a.bit(64));
    assert!(a.bit(255));
    assert!(!a.bit(1));
    assert!(!a.bit(300));
    assert_eq!(256, a.bit_length());

    a.clear_bit(255);
    assert_eq!(65, a.bit_length());

    assert_eq!(0, U256::ZERO.bit_length());
    assert_eq!(1, U256::ONE.bit_length());
}

#[test]
fn bitwise_ops() {
    let a: U256 = rand_value();
    let b: U256 = rand_value();

    assert_eq!(a, !(!a));
    assert_eq!(U256::ZERO, a ^ a);
    assert_eq!(a, a & a);
    assert_eq!(a, a | a);
    assert_eq!(a ^ b, (a | b) & !(a & b));
}

// COMPARISONS
// ================================================================================================

#[test]
fn ordering() {
    assert!(U256::ZERO < U256::ONE);
    assert!(U256::ONE < U256::MAX);
    assert!(U256::new([0, 0, 0, 1]) > U256::new([u64::MAX, u64::MAX, u64::MAX, 0]));

    for _ in 0..100 {
        let a: U256 = rand_value();
        let b: U256 = rand_value();
        assert_eq!(to_big(&a).cmp(&to_big(&b)), a.cmp(&b));
    }
}

// SERIALIZATION
// ================================================================================================

#[test]
fn byte_round_trip() {
    for _ in 0..100 {
        let a: U256 = rand_value();
        assert_eq!(a, U256::from_bytes_le(&a.to_bytes_le()));
    }
}

#[test]
fn short_byte_input() {
    let a = U256::from_bytes_le(&[0xed, 0x01]);
    assert_eq!(U256::from_u64(0x01ed), a);
}

#[test]
fn hex_round_trip() {
    let p_hex = "0x7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed";
    let p = U256::from_hex(p_hex).unwrap();
    assert_eq!(
        U256::new([0xffffffffffffffed, u64::MAX, u64::MAX, 0x7fffffffffffffff]),
        p
    );
    assert_eq!(p_hex, format!("{p}"));

    assert!(U256::from_hex("0xzz").is_err());
    assert!(U256::from_hex("").is_err());
}

proptest! {
    #[test]
    fn byte_round_trip_proptest(bytes in prop::array::uniform32(any::<u8>())) {
        let value = U256::from_bytes_le(&bytes);
        prop_assert_eq!(bytes, value.to_bytes_le());
    }

    #[test]
    fn shift_matches_biguint(lo in any::<u64>(), hi in any::<u64>(), n in 0usize..256) {
        let value = U256::new([lo, 0, hi, 0]);
        let expected = (to_big(&value) << n) % (BigUint::from(1u8) << 256);
        prop_assert_eq!(expected, to_big(&(value << n)));
    }
}
