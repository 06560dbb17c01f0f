// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Precomputed MDS matrices for the standard Rescue configurations.
//!
//! The Cauchy MDS matrix is defined as M[i][j] = 1/(i+j) for i, j in [1, m], computed over
//! the field with modulus p = 2^255 - 19. Tables are provided for the two standard state
//! widths - m = 5 (cipher mode) and m = 12 (hash mode) - together with their inverses, so
//! that building a standard descriptor performs no field inversions. Derivation code in the
//! [params](super::params) module remains in place for non-standard widths.

use math::{Fp, Matrix};

/// Returns the precomputed MDS matrix for the specified state width, or `None` if no table
/// is available for that width.
pub fn mds_matrix(m: usize) -> Option<Matrix> {
    match m {
        5 => Some(to_matrix(&MDS_5)),
        12 => Some(to_matrix(&MDS_12)),
        _ => None,
    }
}

/// Returns the precomputed inverse MDS matrix for the specified state width, or `None` if no
/// table is available for that width.
pub fn inv_mds_matrix(m: usize) -> Option<Matrix> {
    match m {
        5 => Some(to_matrix(&INV_MDS_5)),
        12 => Some(to_matrix(&INV_MDS_12)),
        _ => None,
    }
}

fn to_matrix<const N: usize>(table: &[[Fp; N]; N]) -> Matrix {
    let mut result = Matrix::new(N, N);
    for (i, row) in table.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            result[(i, j)] = *value;
        }
    }
    result
}

// PRECOMPUTED TABLES
// ================================================================================================

/// MDS matrix for state width 5 (cipher mode): M[i][j] = 1/(i+j+2) for 0-indexed i, j.
#[rustfmt::skip]
pub const MDS_5: [[Fp; 5]; 5] = [
    [
        Fp::from_raw([0xfffffffffffffff7, 0xffffffffffffffff, 0xffffffffffffffff, 0x3fffffffffffffff]),
        Fp::from_raw([0x5555555555555549, 0x5555555555555555, 0x5555555555555555, 0x5555555555555555]),
        Fp::from_raw([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        Fp::from_raw([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
    ],
    [
        Fp::from_raw([0x5555555555555549, 0x5555555555555555, 0x5555555555555555, 0x5555555555555555]),
        Fp::from_raw([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        Fp::from_raw([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
    ],
    [
        Fp::from_raw([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        Fp::from_raw([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
    ],
    [
        Fp::from_raw([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
    ],
    [
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
    ],
];

/// Inverse of [MDS_5].
#[rustfmt::skip]
pub const INV_MDS_5: [[Fp; 5]; 5] = [
    [
        Fp::from_raw([0x00000000000001c2, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffffffffef85, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000000003138, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffffffffc4dd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000000000189c, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
    [
        Fp::from_raw([0xffffffffffffef85, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000000000ac44, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffffdd8ad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000000002b110, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffffed89d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
    ],
    [
        Fp::from_raw([0x0000000000003138, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffffdd8ad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000000072d80, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffff6c56d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000000040998, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
    [
        Fp::from_raw([0xffffffffffffc4dd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000000002b110, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffff6c56d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00000000000c1cc8, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffffa9dcd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
    ],
    [
        Fp::from_raw([0x000000000000189c, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffffed89d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000000040998, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffffa9dcd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000000026c28, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
];

/// MDS matrix for state width 12 (hash mode): M[i][j] = 1/(i+j+2) for 0-indexed i, j.
#[rustfmt::skip]
pub const MDS_12: [[Fp; 12]; 12] = [
    [
        Fp::from_raw([0xfffffffffffffff7, 0xffffffffffffffff, 0xffffffffffffffff, 0x3fffffffffffffff]),
        Fp::from_raw([0x5555555555555549, 0x5555555555555555, 0x5555555555555555, 0x5555555555555555]),
        Fp::from_raw([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        Fp::from_raw([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
    ],
    [
        Fp::from_raw([0x5555555555555549, 0x5555555555555555, 0x5555555555555555, 0x5555555555555555]),
        Fp::from_raw([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        Fp::from_raw([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
    ],
    [
        Fp::from_raw([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        Fp::from_raw([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
    ],
    [
        Fp::from_raw([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
    ],
    [
        Fp::from_raw([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        Fp::from_raw([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
    ],
    [
        Fp::from_raw([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        Fp::from_raw([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        Fp::from_raw([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
    ],
    [
        Fp::from_raw([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        Fp::from_raw([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        Fp::from_raw([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        Fp::from_raw([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
    ],
    [
        Fp::from_raw([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        Fp::from_raw([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        Fp::from_raw([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        Fp::from_raw([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        Fp::from_raw([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
    ],
    [
        Fp::from_raw([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        Fp::from_raw([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        Fp::from_raw([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        Fp::from_raw([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        Fp::from_raw([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
        Fp::from_raw([0x0c30c30c30c30c2f, 0x30c30c30c30c30c3, 0xc30c30c30c30c30c, 0x0c30c30c30c30c30]),
    ],
    [
        Fp::from_raw([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        Fp::from_raw([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        Fp::from_raw([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        Fp::from_raw([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        Fp::from_raw([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
        Fp::from_raw([0x0c30c30c30c30c2f, 0x30c30c30c30c30c3, 0xc30c30c30c30c30c, 0x0c30c30c30c30c30]),
        Fp::from_raw([0x745d1745d1745d13, 0x1745d1745d1745d1, 0xd1745d1745d1745d, 0x1d1745d1745d1745]),
    ],
    [
        Fp::from_raw([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        Fp::from_raw([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        Fp::from_raw([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        Fp::from_raw([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        Fp::from_raw([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
        Fp::from_raw([0x0c30c30c30c30c2f, 0x30c30c30c30c30c3, 0xc30c30c30c30c30c, 0x0c30c30c30c30c30]),
        Fp::from_raw([0x745d1745d1745d13, 0x1745d1745d1745d1, 0xd1745d1745d1745d, 0x1d1745d1745d1745]),
        Fp::from_raw([0xe9bd37a6f4de9bc3, 0xa6f4de9bd37a6f4d, 0x9bd37a6f4de9bd37, 0x6f4de9bd37a6f4de]),
    ],
    [
        Fp::from_raw([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        Fp::from_raw([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        Fp::from_raw([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        Fp::from_raw([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        Fp::from_raw([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        Fp::from_raw([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        Fp::from_raw([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        Fp::from_raw([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
        Fp::from_raw([0x0c30c30c30c30c2f, 0x30c30c30c30c30c3, 0xc30c30c30c30c30c, 0x0c30c30c30c30c30]),
        Fp::from_raw([0x745d1745d1745d13, 0x1745d1745d1745d1, 0xd1745d1745d1745d, 0x1d1745d1745d1745]),
        Fp::from_raw([0xe9bd37a6f4de9bc3, 0xa6f4de9bd37a6f4d, 0x9bd37a6f4de9bd37, 0x6f4de9bd37a6f4de]),
        Fp::from_raw([0xaaaaaaaaaaaaaaa2, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x3aaaaaaaaaaaaaaa]),
    ],
];

/// Inverse of [MDS_12].
#[rustfmt::skip]
pub const INV_MDS_12: [[Fp; 12]; 12] = [
    [
        Fp::from_raw([0x0000000000002f88, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffffff677fd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000000b2b4d4, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffff94c6b2d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000025f9a040, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffff774a256d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000144afe6f0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffdfc9fa5ad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000021d252b90, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffffe973c8d8d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000008a4aebd8, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffffe8ca402d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
    ],
    [
        Fp::from_raw([0xfffffffffff677fd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000000002266a64, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffffd4ffb01d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00000001ae031e20, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffff635a4af6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00000023fadc6170, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffa930f87a6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000008b83953b20, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffff6c07d6168d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000006377e348f8, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffd99a9549cd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000067b830e20, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
    [
        Fp::from_raw([0x0000000000b2b4d4, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffffd4ffb01d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000037fdbd418, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffdc01740cad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000d62a8d80f0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffce07233fc6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000007a132293bc0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffff39d3a34c02d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00000d3ef715ced8, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffff70893d1bacd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000037b56e41630, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffff68be0e0bad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
    ],
    [
        Fp::from_raw([0xfffffffff94c6b2d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00000001ae031e20, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffdc01740cad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00000179f0bd7a20, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffff7138f6ff5ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000021bb2e9b5900, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffacc4686cb9ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000883e7fbbbd40, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffff6d468a22206d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000063e990df0240, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffd900ff9f076d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000006a5a5e1fbd0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
    [
        Fp::from_raw([0x0000000025f9a040, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffff635a4af6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000d62a8d80f0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffff7138f6ff5ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000369cc55d0a00, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffff2f7adfe293ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000206d152f3df00, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffca8ce5851e1ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00039e75cafca080, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffd85e3b70ed2ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000f899a26a3030, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffd57573f34ded, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
    ],
    [
        Fp::from_raw([0xffffffff774a256d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00000023fadc6170, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffffce07233fc6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000021bb2e9b5900, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffff2f7adfe293ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000322cd553e1300, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfff8249573917bed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000d0741a78d7500, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfff1d046bb54e6ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0009c0cf5f35a130, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffc294c5cdabced, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000a8bf2b87b100, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
    [
        Fp::from_raw([0x0000000144afe6f0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffa930f87a6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000007a132293bc0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffacc4686cb9ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000206d152f3df00, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfff8249573917bed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0013cd96feae0e00, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffdefeaf02333ded, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x002419709597f430, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffe715983158e0ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0009d725e5451b80, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffe4e146b7e81ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
    ],
    [
        Fp::from_raw([0xfffffffdfc9fa5ad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000008b83953b20, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffff39d3a34c02d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000883e7fbbbd40, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffca8ce5851e1ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000d0741a78d7500, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffdefeaf02333ded, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0037410f969a3710, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffc3542b1e65b96d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x002a053b431ff240, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffef5a488d75ea6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0002e01d5bedf5c0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
    [
        Fp::from_raw([0x000000021d252b90, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffff6c07d6168d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00000d3ef715ced8, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffff6d468a22206d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00039e75cafca080, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfff1d046bb54e6ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x002419709597f430, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffc3542b1e65b96d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0042d9c7020fea20, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffd18e6da855f42d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x001273670de19390, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffcce184485d26d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
    ],
    [
        Fp::from_raw([0xfffffffe973c8d8d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000006377e348f8, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffff70893d1bacd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000063e990df0240, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffd85e3b70ed2ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0009c0cf5f35a130, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffe715983158e0ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x002a053b431ff240, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffd18e6da855f42d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00205b1178ce5bd0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfff31d1d9ce88cad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00023c889cd58640, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
    [
        Fp::from_raw([0x000000008a4aebd8, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffffd99a9549cd, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000037b56e41630, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffd900ff9f076d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000f899a26a3030, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffc294c5cdabced, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0009d725e5451b80, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffef5a488d75ea6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x001273670de19390, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfff31d1d9ce88cad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000524d3cf1e4e60, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffff1afc8e10fd6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
    ],
    [
        Fp::from_raw([0xffffffffe8ca402d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000000067b830e20, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffff68be0e0bad, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000006a5a5e1fbd0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffffd57573f34ded, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0000a8bf2b87b100, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffe4e146b7e81ed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x0002e01d5bedf5c0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xfffcce184485d26d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x00023c889cd58640, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        Fp::from_raw([0xffff1afc8e10fd6d, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]),
        Fp::from_raw([0x000027e7635e0260, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ],
];
