// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use proptest::prelude::*;

use super::{ByteReader, ByteWriter, DeserializationError, Randomizable, SliceReader};

// SLICE READER
// ================================================================================================

#[test]
fn read_u8() {
    let source = [1u8, 3, 5, 7];
    let mut a = SliceReader::new(&source);

    assert_eq!(1, a.read_u8().unwrap());
    assert_eq!(3, a.read_u8().unwrap());
    assert_eq!(5, a.read_u8().unwrap());
    assert_eq!(7, a.read_u8().unwrap());
    assert_eq!(Err(DeserializationError::UnexpectedEOF), a.read_u8());
}

#[test]
fn read_u32() {
    let source = [1u8, 0, 0, 0, 2, 0, 0, 0];
    let mut a = SliceReader::new(&source);

    assert_eq!(1, a.read_u32().unwrap());
    assert_eq!(2, a.read_u32().unwrap());
    assert!(!a.has_more_bytes());
}

#[test]
fn read_u64() {
    let source = 12345678u64.to_le_bytes();
    let mut a = SliceReader::new(&source);

    assert_eq!(12345678, a.read_u64().unwrap());
    assert_eq!(Err(DeserializationError::UnexpectedEOF), a.read_u64());
}

#[test]
fn read_slice() {
    let source = [1u8, 2, 3, 4, 5];
    let mut a = SliceReader::new(&source);

    assert_eq!(&[1, 2], a.read_slice(2).unwrap());
    assert_eq!(&[3, 4, 5], a.read_slice(3).unwrap());
    assert_eq!(Err(DeserializationError::UnexpectedEOF), a.read_slice(1));
}

#[test]
fn write_then_read() {
    let mut target: Vec<u8> = Vec::new();
    target.write_u8(0xab);
    target.write_u32(0xdeadbeef);
    target.write_u64(0x0123456789abcdef);

    let mut reader = SliceReader::new(&target);
    assert_eq!(0xab, reader.read_u8().unwrap());
    assert_eq!(0xdeadbeef, reader.read_u32().unwrap());
    assert_eq!(0x0123456789abcdef, reader.read_u64().unwrap());
}

proptest! {
    #[test]
    fn read_array_round_trip(bytes in prop::array::uniform32(any::<u8>())) {
        let mut reader = SliceReader::new(&bytes);
        let result = reader.read_array::<32>().unwrap();
        prop_assert_eq!(bytes, result);
    }
}

// RANDOMIZABLE
// ================================================================================================

#[test]
fn randomizable_primitives() {
    let bytes = [1u8, 0, 0, 0, 0, 0, 0, 0, 9, 9];
    assert_eq!(Some(1u64), u64::from_random_bytes(&bytes));
    assert_eq!(Some(1u32), u32::from_random_bytes(&bytes));
    assert_eq!(Some(1u8), u8::from_random_bytes(&bytes));
    assert_eq!(Some([1u8, 0]), <[u8; 2]>::from_random_bytes(&bytes));
}
