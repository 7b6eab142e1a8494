//! Container and hash tests for edge cases not covered in unit tests

use lconst_core::encoding::*;
use lconst_core::{Flags, LconstError, Value};
use num_bigint::BigInt;

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_pattern_layout() {
    let v = Value::from_pattern(b"1?");
    let bytes = v.to_container();
    assert_eq!(bytes[0], FLAG_EXPLICIT_BITS | FLAG_EXPLICIT_STR);
    assert_eq!(&bytes[1..4], &[0x00, 0x00, 0x02]);
    // "1?" packs '1' into the low byte
    assert_eq!(&bytes[4..], &[b'?', b'1']);
}

#[test]
fn test_wide_width_field() {
    let v = Value::unknown(0x01_02_03);
    let bytes = v.to_container();
    assert_eq!(&bytes[1..4], &[0x01, 0x02, 0x03]);
    assert_eq!(Value::from_container(&bytes).unwrap(), v);
}

#[test]
fn test_big_magnitude() {
    let num: BigInt = (BigInt::from(1) << 200usize) - 1;
    let v = Value::from(-num);
    let bytes = v.to_container();
    assert_eq!(bytes.len(), HEADER_SIZE + 25);
    assert_eq!(bytes[0] & FLAG_NEGATIVE, FLAG_NEGATIVE);
    assert_eq!(Value::from_container(&bytes).unwrap(), v);
}

// ============================================================================
// Decoding Errors
// ============================================================================

#[test]
fn test_empty_container() {
    let err = Value::from_container(&[]).unwrap_err();
    assert!(matches!(err, LconstError::InvalidContainer { len: 0 }));
    assert_eq!(
        err.to_string(),
        "Invalid container: expected at least 4 bytes, found 0"
    );
}

#[test]
fn test_unknown_flag_bits_are_ignored() {
    let v = Value::from_container(&[0xE0, 0x00, 0x00, 0x03, 0x05]).unwrap();
    assert_eq!(v.flags(), Flags::default());
    assert_eq!(v.to_i().unwrap(), 5);
}

// ============================================================================
// Content Hash
// ============================================================================

#[test]
fn test_hash_follows_equality() {
    let a = Value::from_str_bytes(b"abc").unwrap();
    let b = &Value::from_str_bytes(b"a").unwrap() + &Value::from_str_bytes(b"bc").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.content_hash(), b.content_hash());
}

#[test]
fn test_hash_sees_flags_and_width() {
    let plain = Value::from(5i64);
    let sized = plain.adjust_bits(8).unwrap();
    assert_ne!(plain.content_hash(), sized.content_hash());

    // same digits, numeric versus packed
    let text = Value::from_str_bytes(&[5]).unwrap();
    assert_ne!(Value::from(5i64).adjust_bits(8).unwrap().content_hash(), text.content_hash());
}

// ============================================================================
// Serde
// ============================================================================

#[test]
fn test_bincode_vec() {
    let values = vec![
        Value::from(-1i64),
        Value::from_str_bytes(b"bincode").unwrap(),
        Value::unknown(3),
    ];
    let encoded = bincode::serialize(&values).unwrap();
    let decoded: Vec<Value> = bincode::deserialize(&encoded).unwrap();
    assert_eq!(decoded, values);
}

#[test]
fn test_bincode_rejects_short_container() {
    let encoded = bincode::serialize(&vec![0u8, 0, 1]).unwrap();
    assert!(bincode::deserialize::<Value>(&encoded).is_err());
}
