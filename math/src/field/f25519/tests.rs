// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use num_bigint::BigUint;
use rand_utils::{rand_value, rand_vector};

use super::{Fp, M, U256};

// HELPERS
// ================================================================================================

fn modulus() -> BigUint {
    BigUint::from_bytes_le(&M.to_bytes_le())
}

fn to_big(value: &Fp) -> BigUint {
    BigUint::from_bytes_le(&value.to_bytes())
}

fn from_big(value: BigUint) -> Fp {
    Fp::from_bytes(&value.to_bytes_le())
}

// BASIC ALGEBRA
// ================================================================================================

#[test]
fn add() {
    // identity
    let r: Fp = rand_value();
    assert_eq!(r, r + Fp::ZERO);

    // test addition within bounds
    assert_eq!(Fp::from(5u64), Fp::from(2u64) + Fp::from(3u64));

    // test overflow
    let t = Fp::new(M) - Fp::ONE;
    assert_eq!(Fp::ZERO, t + Fp::ONE);
    assert_eq!(Fp::ONE, t + Fp::from(2u64));

    // test random values
    for _ in 0..100 {
        let r1: Fp = rand_value();
        let r2: Fp = rand_value();

        let expected = from_big((to_big(&r1) + to_big(&r2)) % modulus());
        assert_eq!(expected, r1 + r2);
    }
}

#[test]
fn sub() {
    // identity
    let r: Fp = rand_value();
    assert_eq!(r, r - Fp::ZERO);

    // test subtraction within bounds
    assert_eq!(Fp::from(2u64), Fp::from(5u64) - Fp::from(3u64));

    // test underflow
    let expected = Fp::new(M) - Fp::from(2u64);
    assert_eq!(expected, Fp::from(3u64) - Fp::from(5u64));

    // round trip
    for _ in 0..100 {
        let r1: Fp = rand_value();
        let r2: Fp = rand_value();
        assert_eq!(r1, (r1 + r2) - r2);
    }
}

#[test]
fn neg() {
    assert_eq!(Fp::ZERO, -Fp::ZERO);
    assert_eq!(Fp::new(M) - Fp::ONE, -Fp::ONE);

    for _ in 0..100 {
        let r: Fp = rand_value();
        assert_eq!(Fp::ZERO, r + (-r));
    }
}

#[test]
fn mul() {
    // identity
    let r: Fp = rand_value();
    assert_eq!(Fp::ZERO, r * Fp::ZERO);
    assert_eq!(r, r * Fp::ONE);

    // test multiplication within bounds
    assert_eq!(Fp::from(15u64), Fp::from(5u64) * Fp::from(3u64));

    // test overflow
    let t = Fp::new(M) - Fp::ONE;
    assert_eq!(Fp::ONE, t * t);
    assert_eq!(Fp::new(M) - Fp::from(2u64), t * Fp::from(2u64));

    // test random values
    let v1: Vec<Fp> = rand_vector(100);
    let v2: Vec<Fp> = rand_vector(100);
    for i in 0..v1.len() {
        let r1 = v1[i];
        let r2 = v2[i];

        let expected = from_big((to_big(&r1) * to_big(&r2)) % modulus());
        assert_eq!(expected, r1 * r2, "failed for: {r1} * {r2}");
    }
}

#[test]
fn square() {
    for _ in 0..100 {
        let r: Fp = rand_value();
        assert_eq!(r * r, r.square());
    }
}

#[test]
fn pow5() {
    assert_eq!(Fp::ZERO, Fp::ZERO.pow5());
    assert_eq!(Fp::ONE, Fp::ONE.pow5());
    assert_eq!(Fp::from(32u64), Fp::from(2u64).pow5());

    for _ in 0..100 {
        let r: Fp = rand_value();
        assert_eq!(r.pow(&U256::from_u64(5)), r.pow5());
    }
}

#[test]
fn pow() {
    // anything to the power of zero is one
    let r: Fp = rand_value();
    assert_eq!(Fp::ONE, r.pow(&U256::ZERO));

    // anything to the power of one stays unchanged
    assert_eq!(r, r.pow(&U256::ONE));

    // small cases
    assert_eq!(Fp::from(1024u64), Fp::from(2u64).pow(&U256::from_u64(10)));

    // Fermat: a^(p-1) = 1 for a != 0
    let p_minus_1 = M - U256::ONE;
    for _ in 0..10 {
        let r: Fp = rand_value();
        if !r.is_zero() {
            assert_eq!(Fp::ONE, r.pow(&p_minus_1));
        }
    }

    // random exponents against arbitrary precision
    for _ in 0..20 {
        let base: Fp = rand_value();
        let exp: Fp = rand_value();
        let expected =
            from_big(to_big(&base).modpow(&BigUint::from_bytes_le(&exp.to_bytes()), &modulus()));
        assert_eq!(expected, base.pow(exp.value()));
    }
}

#[test]
fn inv() {
    // identity
    assert_eq!(Fp::ONE, Fp::ONE.inv().unwrap());

    // inverting zero fails
    assert!(Fp::ZERO.inv().is_err());

    // small case: 2^(-1) = (p + 1) / 2
    let two_inv = Fp::from(2u64).inv().unwrap();
    assert_eq!(Fp::ONE, two_inv * Fp::from(2u64));

    // test random values
    let x: Vec<Fp> = rand_vector(100);
    for i in x {
        let y = i.inv().unwrap();
        assert_eq!(Fp::ONE, i * y);
    }
}

// CONSTANT-TIME COMPARISONS
// ================================================================================================

#[test]
fn ct_comparisons() {
    let a: Fp = rand_value();
    assert!(a.ct_eq(&a));
    assert!(!a.ct_eq(&(a + Fp::ONE)));

    assert!(Fp::ZERO.ct_less_than(&Fp::ONE));
    assert!(!Fp::ONE.ct_less_than(&Fp::ONE));
    assert!(!Fp::ONE.ct_less_than(&Fp::ZERO));

    for _ in 0..100 {
        let a: Fp = rand_value();
        let b: Fp = rand_value();
        assert_eq!(to_big(&a) < to_big(&b), a.ct_less_than(&b));
        assert_eq!(a == b, a.ct_eq(&b));
    }
}

// CANONICAL FORM
// ================================================================================================

#[test]
fn new_reduces() {
    // p reduces to zero
    assert_eq!(Fp::ZERO, Fp::new(M));

    // p + 1 reduces to one
    assert_eq!(Fp::ONE, Fp::new(M + U256::ONE));

    // 2^256 - 1 = 2p + 37 reduces to 37
    assert_eq!(Fp::from(37u64), Fp::new(U256::MAX));
}

#[test]
fn alpha_inverse_exponent() {
    // 5^(-1) mod (p - 1); the odd-round S-box exponent of the Rescue permutation
    let alpha_inv = U256::new([
        0xccccccccccccccc1,
        0xcccccccccccccccc,
        0xcccccccccccccccc,
        0x4ccccccccccccccc,
    ]);

    for _ in 0..10 {
        let r: Fp = rand_value();
        assert_eq!(r, r.pow5().pow(&alpha_inv));
        assert_eq!(r, r.pow(&alpha_inv).pow5());
    }
}

// SERIALIZATION
// ================================================================================================

#[test]
fn byte_round_trip() {
    for _ in 0..100 {
        let r: Fp = rand_value();
        assert_eq!(r, Fp::from_bytes(&r.to_bytes()));
    }
}

#[test]
fn from_wide_bytes() {
    // 2^256 = 38 (mod p)
    let mut bytes = [0u8; 64];
    bytes[32] = 1;
    assert_eq!(Fp::from(38u64), Fp::from_wide_bytes(&bytes));

    // 48-byte chunks (the round-constant sampling width) against arbitrary precision
    for _ in 0..100 {
        let chunk: [u8; 32] = rand_value();
        let tail: [u8; 16] = rand_value();
        let mut wide = [0u8; 48];
        wide[..32].copy_from_slice(&chunk);
        wide[32..].copy_from_slice(&tail);

        let expected = from_big(BigUint::from_bytes_le(&wide) % modulus());
        assert_eq!(expected, Fp::from_wide_bytes(&wide));
    }
}

#[test]
fn from_bytes_reduces() {
    // a non-canonical encoding of 1 (p + 1)
    let bytes = (M + U256::ONE).to_bytes_le();
    assert_eq!(Fp::ONE, Fp::from_bytes(&bytes));

    // all bits set
    assert_eq!(Fp::from(37u64), Fp::from_bytes(&[0xff; 32]));
}
