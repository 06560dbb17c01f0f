// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use rand_utils::rand_value;

use super::{
    add, adder, bin_size, field_add, field_sub, from_bits_le, lt, sign_bit, sub, to_bits_le,
};
use crate::{Fp, U256};

const P: U256 = Fp::MODULUS;

// CONVERSIONS
// ================================================================================================

#[test]
fn bin_size_for_field() {
    // bit_length(p - 1) + 3 = 255 + 3
    assert_eq!(258, bin_size(&(P - U256::ONE)));
    assert_eq!(4, bin_size(&U256::ONE));
    assert_eq!(3, bin_size(&U256::ZERO));
}

#[test]
fn bits_round_trip() {
    for _ in 0..100 {
        let x: Fp = rand_value();
        let bits = to_bits_le(x.value(), 258);
        assert_eq!(*x.value(), from_bits_le(&bits));
    }
}

// BIT-VECTOR ARITHMETIC
// ================================================================================================

#[test]
fn adder_small_values() {
    let x = to_bits_le(&U256::from_u64(13), 8);
    let y = to_bits_le(&U256::from_u64(29), 8);

    assert_eq!(U256::from_u64(42), from_bits_le(&adder(&x, &y, false)));
    assert_eq!(U256::from_u64(43), from_bits_le(&adder(&x, &y, true)));
}

#[test]
fn adder_overflow_sets_sign() {
    // 200 + 100 = 300 exceeds the positive range of a 9-bit two's-complement vector
    let x = to_bits_le(&U256::from_u64(200), 9);
    let y = to_bits_le(&U256::from_u64(100), 9);
    assert!(sign_bit(&add(&x, &y)));

    // with one more bit the sum is representable
    let x = to_bits_le(&U256::from_u64(200), 10);
    let y = to_bits_le(&U256::from_u64(100), 10);
    assert_eq!(U256::from_u64(300), from_bits_le(&add(&x, &y)));
}

#[test]
fn sub_and_sign() {
    let x = to_bits_le(&U256::from_u64(5), 8);
    let y = to_bits_le(&U256::from_u64(3), 8);

    assert_eq!(U256::from_u64(2), from_bits_le(&sub(&x, &y)));

    // 3 - 5 is negative
    assert!(!lt(&x, &y));
    assert!(lt(&y, &x));
}

#[test]
fn lt_random_values() {
    for _ in 0..100 {
        let a: Fp = rand_value();
        let b: Fp = rand_value();
        let a_bits = to_bits_le(a.value(), 258);
        let b_bits = to_bits_le(b.value(), 258);
        assert_eq!(a.value() < b.value(), lt(&a_bits, &b_bits));
    }
}

// FIELD WRAPPERS
// ================================================================================================

#[test]
fn field_add_matches_native() {
    let n = bin_size(&(P - U256::ONE));

    // overflow case: (p - 1) + 2 = 1
    let p_minus_1 = P - U256::ONE;
    assert_eq!(U256::ONE, field_add(&p_minus_1, &U256::from_u64(2), &P, n));

    for _ in 0..50 {
        let a: Fp = rand_value();
        let b: Fp = rand_value();
        let expected = a + b;
        assert_eq!(*expected.value(), field_add(a.value(), b.value(), &P, n));
    }
}

#[test]
fn field_sub_matches_native() {
    let n = bin_size(&(P - U256::ONE));

    // underflow case: 3 - 5 = p - 2
    let expected = P - U256::from_u64(2);
    assert_eq!(expected, field_sub(&U256::from_u64(3), &U256::from_u64(5), &P, n));

    for _ in 0..50 {
        let a: Fp = rand_value();
        let b: Fp = rand_value();
        let expected = a - b;
        assert_eq!(*expected.value(), field_sub(a.value(), b.value(), &P, n));
    }
}
