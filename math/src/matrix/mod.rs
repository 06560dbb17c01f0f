// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Dense matrices over the Curve25519 base field.
//!
//! The [Matrix] type provides the linear algebra needed by the Rescue permutation: matrix
//! multiplication, element-wise addition/subtraction (optionally through the bit-adder
//! constant-time layer), element-wise exponentiation, scalar multiplication, determinant,
//! and transposition. Data is stored in row-major order; column vectors are matrices with
//! a single column.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::{ct, errors::MatrixError, Fp, U256};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

// The S-box exponent for which element-wise exponentiation takes the specialized chain.
const ALPHA: U256 = U256::new([5, 0, 0, 0]);

// MATRIX
// ================================================================================================

/// A dense matrix over [Fp] stored in row-major order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Fp>,
}

impl Matrix {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a new matrix with the specified dimensions, initialized to zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![Fp::ZERO; rows * cols] }
    }

    /// Creates a new matrix with the specified dimensions, initialized to zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
    }

    /// Creates a new identity matrix with the specified dimension.
    pub fn identity(size: usize) -> Self {
        let mut result = Self::new(size, size);
        for i in 0..size {
            result[(i, i)] = Fp::ONE;
        }
        result
    }

    /// Creates a new matrix from nested rows of field elements.
    ///
    /// # Errors
    /// Returns an error if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<Fp>>) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Ok(Self { rows: 0, cols: 0, data: Vec::new() });
        }

        let n_rows = rows.len();
        let n_cols = rows[0].len();
        for row in rows.iter() {
            if row.len() != n_cols {
                return Err(MatrixError::ShapeMismatch {
                    lhs: (n_rows, n_cols),
                    rhs: (n_rows, row.len()),
                });
            }
        }

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self { rows: n_rows, cols: n_cols, data })
    }

    /// Creates a new column vector from the provided elements.
    pub fn column(data: Vec<Fp>) -> Self {
        Self { rows: data.len(), cols: 1, data }
    }

    // DIMENSIONS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if this matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if this matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements of this matrix in row-major order.
    pub fn data(&self) -> &[Fp] {
        &self.data
    }

    // ARITHMETIC
    // --------------------------------------------------------------------------------------------

    /// Multiplies this matrix by another matrix.
    ///
    /// # Errors
    /// Returns an error if the number of columns of `self` does not equal the number of rows
    /// of `rhs`.
    pub fn mat_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::ShapeMismatch {
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }

        let mut result = Self::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = Fp::ZERO;
                for k in 0..self.cols {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }

        Ok(result)
    }

    /// Adds another matrix to this matrix element-wise.
    ///
    /// When `constant_time` is set, each element addition goes through the bit-adder layer
    /// in the [ct] module; otherwise the native field addition is used. Both paths produce
    /// identical results.
    ///
    /// # Errors
    /// Returns an error if the dimensions of the two matrices do not match.
    pub fn add(&self, rhs: &Self, constant_time: bool) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;

        let mut result = Self::new(self.rows, self.cols);
        if constant_time {
            let bin_size = ct::bin_size(&(Fp::MODULUS - U256::ONE));
            for (r, (a, b)) in result.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
                let sum = ct::field_add(a.value(), b.value(), &Fp::MODULUS, bin_size);
                *r = Fp::new(sum);
            }
        } else {
            for (r, (a, b)) in result.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
                *r = *a + *b;
            }
        }

        Ok(result)
    }

    /// Subtracts another matrix from this matrix element-wise.
    ///
    /// When `constant_time` is set, each element subtraction goes through the bit-adder
    /// layer in the [ct] module; otherwise the native field subtraction is used. Both paths
    /// produce identical results.
    ///
    /// # Errors
    /// Returns an error if the dimensions of the two matrices do not match.
    pub fn sub(&self, rhs: &Self, constant_time: bool) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;

        let mut result = Self::new(self.rows, self.cols);
        if constant_time {
            let bin_size = ct::bin_size(&(Fp::MODULUS - U256::ONE));
            for (r, (a, b)) in result.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
                let diff = ct::field_sub(a.value(), b.value(), &Fp::MODULUS, bin_size);
                *r = Fp::new(diff);
            }
        } else {
            for (r, (a, b)) in result.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
                *r = *a - *b;
            }
        }

        Ok(result)
    }

    /// Raises every element of this matrix to the power of `exp`.
    ///
    /// The exponent 5 (the forward S-box exponent of the Rescue permutation) is routed
    /// through the specialized two-squarings-one-multiplication chain; all other exponents
    /// use the Montgomery ladder.
    pub fn pow(&self, exp: &U256) -> Self {
        let data = if *exp == ALPHA {
            self.data.iter().map(|e| e.pow5()).collect()
        } else {
            self.data.iter().map(|e| e.pow(exp)).collect()
        };
        Self { rows: self.rows, cols: self.cols, data }
    }

    /// Multiplies every element of this matrix by the provided scalar.
    pub fn scalar_mul(&self, scalar: Fp) -> Self {
        let data = self.data.iter().map(|e| *e * scalar).collect();
        Self { rows: self.rows, cols: self.cols, data }
    }

    /// Computes the determinant of this matrix via Gaussian elimination.
    ///
    /// The elimination partitions the current rows into those with a zero leading element
    /// and those without, takes the *first* row of the non-zero partition as the pivot
    /// (order-preserving tie-break), normalizes it, eliminates the leading column from the
    /// other non-zero rows, and recurses on the transformed non-zero rows followed by the
    /// zero rows. If the non-zero partition is ever empty, the matrix is singular and the
    /// determinant is zero.
    ///
    /// # Errors
    /// Returns an error if the matrix is not square or is empty.
    pub fn det(&self) -> Result<Fp, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }
        if self.rows == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        if self.rows == 1 {
            return Ok(self[(0, 0)]);
        }

        let mut rows_data: Vec<Vec<Fp>> = (0..self.rows)
            .map(|i| self.data[i * self.cols..(i + 1) * self.cols].to_vec())
            .collect();

        let mut det_value = Fp::ONE;

        for _ in 0..self.cols {
            // partition rows by whether their leading element is zero, preserving order
            let mut nz_rows = Vec::new();
            let mut z_rows = Vec::new();
            for row in rows_data.drain(..) {
                if row[0].is_zero() {
                    z_rows.push(row);
                } else {
                    nz_rows.push(row);
                }
            }

            // no pivot row means rank < n, determinant is zero
            if nz_rows.is_empty() {
                return Ok(Fp::ZERO);
            }

            let pivot_row = nz_rows.remove(0);
            let pivot = pivot_row[0];
            det_value *= pivot;

            let pivot_inv = pivot.inv()?;
            let normalized: Vec<Fp> = pivot_row.iter().map(|v| *v * pivot_inv).collect();

            // eliminate the leading column from the remaining non-zero rows
            for row in nz_rows.iter_mut() {
                let lead = row[0];
                for (v, n) in row.iter_mut().zip(normalized.iter()) {
                    *v = *v - lead * *n;
                }
            }

            // drop the leading column and recurse on non-zero rows followed by zero rows
            for row in nz_rows.into_iter().chain(z_rows) {
                if row.len() > 1 {
                    rows_data.push(row[1..].to_vec());
                }
            }
        }

        Ok(det_value)
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    // CONVERSIONS
    // --------------------------------------------------------------------------------------------

    /// Converts a column vector into a vector of field elements.
    ///
    /// # Errors
    /// Returns an error if this matrix is not a column vector.
    pub fn to_vector(&self) -> Result<Vec<Fp>, MatrixError> {
        if self.cols != 1 {
            return Err(MatrixError::NotColumnVector);
        }
        Ok(self.data.clone())
    }

    // HELPERS
    // --------------------------------------------------------------------------------------------

    fn check_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::ShapeMismatch {
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }
        Ok(())
    }
}

// INDEXING
// ================================================================================================

impl Index<(usize, usize)> for Matrix {
    type Output = Fp;

    fn index(&self, (row, col): (usize, usize)) -> &Fp {
        debug_assert!(row < self.rows && col < self.cols, "matrix index out of range");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Fp {
        debug_assert!(row < self.rows && col < self.cols, "matrix index out of range");
        &mut self.data[row * self.cols + col]
    }
}
