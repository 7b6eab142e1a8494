//! Integration tests for the literal parser

use lconst_core::Value;
use lconst_parser::parse;
use num_bigint::BigInt;

fn num_of(v: &Value) -> BigInt {
    v.num().clone()
}

// ============================================================================
// Equivalent Spellings
// ============================================================================

#[test]
fn test_same_number_in_every_base() {
    let expected = parse("202").unwrap();
    for text in ["0d202", "0xCA", "0xca", "0o312", "0b11001010", "2_0_2", "+202"] {
        assert_eq!(parse(text).unwrap(), expected, "literal {}", text);
    }
}

#[test]
fn test_decimal_matches_native_conversion() {
    for n in [0i64, 1, -1, 63, 64, -64, -65, 1 << 40, i64::MAX, i64::MIN] {
        assert_eq!(parse(&n.to_string()).unwrap(), Value::from(n), "literal {}", n);
    }
}

#[test]
fn test_wide_literal() {
    let v = parse("0x1_0000_0000_0000_0000_0000").unwrap();
    assert_eq!(v.bits(), 81);
    assert_eq!(num_of(&v), BigInt::from(1) << 80usize);
    assert!(!v.is_i());
}

// ============================================================================
// Sign and Width Folding
// ============================================================================

#[test]
fn test_negative_with_explicit_width_folds() {
    let cases = [
        ("-1s8bits", 255, 8, true),
        ("-1u8bits", 255, 8, false),
        ("-3s4bits", 13, 4, true),
        ("-128s8", 128, 8, true),
    ];
    for (text, num, bits, signed) in cases {
        let v = parse(text).unwrap();
        assert_eq!(num_of(&v), BigInt::from(num), "literal {}", text);
        assert_eq!(v.bits(), bits, "literal {}", text);
        assert_eq!(v.is_signed(), signed, "literal {}", text);
        assert!(v.has_explicit_bits());
        assert!(v.has_explicit_sign());
    }
}

#[test]
fn test_negative_without_width_stays_negative() {
    let v = parse("-8u").unwrap();
    assert_eq!(num_of(&v), BigInt::from(-8));
    assert!(!v.is_signed());
    assert!(v.has_explicit_sign());
}

#[test]
fn test_signed_suffix_adds_sign_bit() {
    assert_eq!(parse("0xFF").unwrap().bits(), 8);
    assert_eq!(parse("0xFFs").unwrap().bits(), 9);
    assert_eq!(parse("0xFFu").unwrap().bits(), 8);
}

// ============================================================================
// Strings and Patterns
// ============================================================================

#[test]
fn test_bare_identifier_is_string() {
    let v = parse("foo").unwrap();
    assert!(v.is_pure_string());
    assert_eq!(v.unpack_string().unwrap(), "foo");
    assert_eq!(v, Value::from_str_bytes(b"foo").unwrap());
}

#[test]
fn test_quote_styles_agree() {
    assert_eq!(parse("'abc'").unwrap(), parse("\"abc\"").unwrap());
    // mismatched quotes are kept
    assert_eq!(parse("'abc\"").unwrap().unpack_string().unwrap(), "'abc\"");
}

#[test]
fn test_pattern_digits() {
    let v = parse("0b1_?0_x").unwrap();
    assert_eq!(v.unpack_string().unwrap(), "1?0x");
    assert_eq!(v.bits(), 4);

    let v = parse("0bzzzz").unwrap();
    assert_eq!(v.unpack_string_no_xz().unwrap(), "0000");
}

#[test]
fn test_pattern_with_wider_suffix() {
    let v = parse("0b1?s6bits").unwrap();
    assert_eq!(v.bits(), 6);
    assert!(v.is_signed());
    assert_eq!(v.unpack_string().unwrap(), "1?");
}

#[test]
fn test_plain_binary_is_numeric() {
    let v = parse("0b0101").unwrap();
    assert!(!v.is_string());
    assert_eq!(v.to_i().unwrap(), 5);
    assert_eq!(v.bits(), 3);
}
