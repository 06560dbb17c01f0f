// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

use math::{FieldError, MatrixError};

// RESCUE ERROR
// ================================================================================================

/// Defines errors which can occur when building or using Rescue primitives.
///
/// All failures surface to the caller at the API boundary; the library performs no logging
/// and no retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RescueError {
    /// An input had a malformed size or an invalid combination of parameters.
    InvalidArgument(String),
    /// The multiplicative inverse of zero was requested.
    DivisionByZero,
    /// Matrix dimensions were incompatible for the requested operation.
    ShapeMismatch {
        /// Dimensions (rows, columns) of the left-hand operand.
        lhs: (usize, usize),
        /// Dimensions (rows, columns) of the right-hand operand.
        rhs: (usize, usize),
    },
    /// A square matrix was expected.
    NotSquare,
    /// A column vector was expected.
    NotColumnVector,
    /// A second squeeze was requested from a one-shot XOF instance.
    AlreadyFinalized,
    /// The OS entropy source failed to produce random bytes.
    RngFailure(String),
    /// An internal invariant was violated; this indicates a broken build rather than bad
    /// caller input.
    InternalInvariant(String),
}

impl fmt::Display for RescueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::DivisionByZero => write!(f, "cannot invert zero in the field"),
            Self::ShapeMismatch { lhs, rhs } => {
                write!(
                    f,
                    "matrix dimensions {}x{} and {}x{} are incompatible",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            },
            Self::NotSquare => write!(f, "matrix must be square"),
            Self::NotColumnVector => write!(f, "matrix must be a column vector"),
            Self::AlreadyFinalized => {
                write!(f, "XOF output was already squeezed; a new instance is required")
            },
            Self::RngFailure(msg) => write!(f, "failed to generate random bytes: {msg}"),
            Self::InternalInvariant(msg) => write!(f, "internal invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for RescueError {}

impl From<FieldError> for RescueError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

impl From<MatrixError> for RescueError {
    fn from(err: MatrixError) -> Self {
        match err {
            MatrixError::ShapeMismatch { lhs, rhs } => Self::ShapeMismatch { lhs, rhs },
            MatrixError::NotSquare => Self::NotSquare,
            MatrixError::NotColumnVector => Self::NotColumnVector,
            MatrixError::EmptyMatrix => {
                Self::InvalidArgument(String::from("matrix must be non-empty"))
            },
            MatrixError::DivisionByZero => Self::DivisionByZero,
        }
    }
}
