// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

// FIELD ERROR
// ================================================================================================

/// Defines errors which can occur in field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The multiplicative inverse of zero was requested.
    DivisionByZero,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "cannot invert zero in the field"),
        }
    }
}

impl core::error::Error for FieldError {}

// MATRIX ERROR
// ================================================================================================

/// Defines errors which can occur in matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Dimensions of the operands are incompatible for the requested operation.
    ShapeMismatch {
        /// Dimensions (rows, columns) of the left-hand operand.
        lhs: (usize, usize),
        /// Dimensions (rows, columns) of the right-hand operand.
        rhs: (usize, usize),
    },
    /// A square matrix was expected.
    NotSquare,
    /// A column vector (a matrix with a single column) was expected.
    NotColumnVector,
    /// A non-empty matrix was expected.
    EmptyMatrix,
    /// A field inversion failed during elimination.
    DivisionByZero,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { lhs, rhs } => {
                write!(
                    f,
                    "matrix dimensions {}x{} and {}x{} are incompatible",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            },
            Self::NotSquare => write!(f, "matrix must be square"),
            Self::NotColumnVector => write!(f, "matrix must be a column vector"),
            Self::EmptyMatrix => write!(f, "matrix must be non-empty"),
            Self::DivisionByZero => write!(f, "cannot invert zero in the field"),
        }
    }
}

impl core::error::Error for MatrixError {}

impl From<FieldError> for MatrixError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::DivisionByZero => Self::DivisionByZero,
        }
    }
}
