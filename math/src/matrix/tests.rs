// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use rand_utils::rand_vector;

use super::{Matrix, MatrixError};
use crate::{Fp, U256};

// HELPERS
// ================================================================================================

fn from_u64_rows(rows: &[&[u64]]) -> Matrix {
    let rows = rows
        .iter()
        .map(|r| r.iter().map(|v| Fp::from(*v)).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    Matrix::from_rows(rows).unwrap()
}

fn random_matrix(rows: usize, cols: usize) -> Matrix {
    let mut result = Matrix::new(rows, cols);
    let values: Vec<Fp> = rand_vector(rows * cols);
    for (i, value) in values.into_iter().enumerate() {
        result[(i / cols, i % cols)] = value;
    }
    result
}

// CONSTRUCTION
// ================================================================================================

#[test]
fn construction() {
    let m = Matrix::new(2, 3);
    assert_eq!(2, m.rows());
    assert_eq!(3, m.cols());
    assert!(m.data().iter().all(|e| e.is_zero()));

    let id = Matrix::identity(3);
    assert_eq!(Fp::ONE, id[(0, 0)]);
    assert_eq!(Fp::ZERO, id[(0, 1)]);

    let col = Matrix::column(vec![Fp::ONE, Fp::from(2u64)]);
    assert_eq!(2, col.rows());
    assert_eq!(1, col.cols());
    assert_eq!(vec![Fp::ONE, Fp::from(2u64)], col.to_vector().unwrap());

    // ragged rows are rejected
    let ragged = Matrix::from_rows(vec![vec![Fp::ONE], vec![Fp::ONE, Fp::ONE]]);
    assert!(ragged.is_err());
}

// ARITHMETIC
// ================================================================================================

#[test]
fn mat_mul() {
    let a = from_u64_rows(&[&[1, 2], &[3, 4]]);
    let b = from_u64_rows(&[&[5, 6], &[7, 8]]);

    let expected = from_u64_rows(&[&[19, 22], &[43, 50]]);
    assert_eq!(expected, a.mat_mul(&b).unwrap());

    // identity
    let id = Matrix::identity(2);
    assert_eq!(a, a.mat_mul(&id).unwrap());
    assert_eq!(a, id.mat_mul(&a).unwrap());

    // column vector
    let v = Matrix::column(vec![Fp::ONE, Fp::from(2u64)]);
    let expected = Matrix::column(vec![Fp::from(5u64), Fp::from(11u64)]);
    assert_eq!(expected, a.mat_mul(&v).unwrap());

    // shape mismatch
    assert!(matches!(a.mat_mul(&Matrix::new(3, 2)), Err(MatrixError::ShapeMismatch { .. })));
}

#[test]
fn add_and_sub() {
    let a = random_matrix(3, 3);
    let b = random_matrix(3, 3);

    // addition and subtraction round trip
    let sum = a.add(&b, false).unwrap();
    assert_eq!(a, sum.sub(&b, false).unwrap());

    // adding zeros is the identity
    let zeros = Matrix::zeros(3, 3);
    assert_eq!(a, a.add(&zeros, false).unwrap());

    // shape mismatch
    assert!(a.add(&Matrix::new(2, 3), false).is_err());
    assert!(a.sub(&Matrix::new(3, 2), false).is_err());
}

#[test]
fn add_and_sub_constant_time() {
    // the bit-adder path must produce exactly the same results as the native path
    let a = random_matrix(3, 4);
    let b = random_matrix(3, 4);

    assert_eq!(a.add(&b, false).unwrap(), a.add(&b, true).unwrap());
    assert_eq!(a.sub(&b, false).unwrap(), a.sub(&b, true).unwrap());
}

#[test]
fn pow() {
    let a = from_u64_rows(&[&[2, 3], &[4, 5]]);

    let expected = from_u64_rows(&[&[32, 243], &[1024, 3125]]);
    assert_eq!(expected, a.pow(&U256::from_u64(5)));

    // the specialized exponent-5 chain must agree with the generic ladder
    let b = random_matrix(2, 2);
    let mut expected = Matrix::new(2, 2);
    for i in 0..2 {
        for j in 0..2 {
            expected[(i, j)] = b[(i, j)].pow(&U256::from_u64(5));
        }
    }
    assert_eq!(expected, b.pow(&U256::from_u64(5)));

    // exponent 1 is the identity
    assert_eq!(a, a.pow(&U256::ONE));
}

#[test]
fn scalar_mul() {
    let a = from_u64_rows(&[&[1, 2], &[3, 4]]);
    let expected = from_u64_rows(&[&[3, 6], &[9, 12]]);
    assert_eq!(expected, a.scalar_mul(Fp::from(3u64)));
}

// DETERMINANT
// ================================================================================================

#[test]
fn det() {
    // 1x1
    let m = from_u64_rows(&[&[7]]);
    assert_eq!(Fp::from(7u64), m.det().unwrap());

    // identity
    assert_eq!(Fp::ONE, Matrix::identity(4).det().unwrap());

    // 2x2: det([[1, 2], [3, 4]]) = -2
    let m = from_u64_rows(&[&[1, 2], &[3, 4]]);
    assert_eq!(-Fp::from(2u64), m.det().unwrap());

    // diagonal
    let m = from_u64_rows(&[&[2, 0, 0], &[0, 3, 0], &[0, 0, 5]]);
    assert_eq!(Fp::from(30u64), m.det().unwrap());

    // 3x3 with a zero leading element in the first row
    let m = from_u64_rows(&[&[0, 2, 1], &[1, 0, 2], &[2, 1, 0]]);
    assert_eq!(Fp::from(9u64), m.det().unwrap());
}

#[test]
fn det_singular() {
    // linearly dependent rows
    let m = from_u64_rows(&[&[1, 2], &[2, 4]]);
    assert_eq!(Fp::ZERO, m.det().unwrap());

    // zero matrix
    assert_eq!(Fp::ZERO, Matrix::zeros(3, 3).det().unwrap());
}

#[test]
fn det_errors() {
    assert!(matches!(Matrix::new(2, 3).det(), Err(MatrixError::NotSquare)));
    assert!(matches!(Matrix::new(0, 0).det(), Err(MatrixError::EmptyMatrix)));
}

// TRANSPOSE AND CONVERSIONS
// ================================================================================================

#[test]
fn transpose() {
    let a = from_u64_rows(&[&[1, 2, 3], &[4, 5, 6]]);
    let expected = from_u64_rows(&[&[1, 4], &[2, 5], &[3, 6]]);
    assert_eq!(expected, a.transpose());

    // transposing twice is the identity
    let b = random_matrix(3, 5);
    assert_eq!(b, b.transpose().transpose());
}

#[test]
fn to_vector() {
    let v = Matrix::column(vec![Fp::ONE, Fp::from(2u64), Fp::from(3u64)]);
    assert_eq!(vec![Fp::ONE, Fp::from(2u64), Fp::from(3u64)], v.to_vector().unwrap());

    assert!(matches!(Matrix::new(2, 2).to_vector(), Err(MatrixError::NotColumnVector)));
}
