//! Cross-module interaction tests
//!
//! Tests the agreement between the parser, the folding engine, the
//! container codec and the emitters.

use lconst_core::{LconstError, Value};
use lconst_emit::{to_pyrope, to_verilog, to_yosys, Dialect};
use lconst_parser::{parse, ParseError};
use proptest::prelude::*;

// ============================================================================
// Parser -> Core
// ============================================================================

#[test]
fn test_parsed_and_built_values_agree() {
    assert_eq!(parse("42").unwrap(), Value::from(42i64));
    assert_eq!(parse("-42").unwrap(), Value::from(-42i64));
    assert_eq!(parse("'ok'").unwrap(), Value::from_str_bytes(b"ok").unwrap());
    assert_eq!(parse("0b1x").unwrap(), Value::from_pattern(b"1x"));
}

#[test]
fn test_hash_dedupes_spellings() {
    let a = parse("0xff").unwrap();
    let b = parse("255").unwrap();
    let c = parse("0b1111_1111").unwrap();
    assert_eq!(a.content_hash(), b.content_hash());
    assert_eq!(b.content_hash(), c.content_hash());
    assert_ne!(a.content_hash(), parse("255u").unwrap().content_hash());
}

#[test]
fn test_errors_stay_distinct() {
    let parse_err = parse("5u0").unwrap_err();
    assert!(matches!(parse_err, ParseError::MalformedLiteral { .. }));

    let core_err = parse("'a'").unwrap().to_i().unwrap_err();
    assert!(matches!(core_err, LconstError::NotRepresentable { .. }));
}

// ============================================================================
// Core -> Emit
// ============================================================================

#[test]
fn test_dialect_names_parse() {
    let v = Value::from(6i64);
    for name in ["pyrope", "verilog", "firrtl", "yosys"] {
        let dialect: Dialect = name.parse().unwrap();
        assert!(!lconst_emit::emit(&v, dialect).is_empty());
    }
    assert!("vhdl".parse::<Dialect>().is_err());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn test_parse_matches_native(n in any::<i64>()) {
        prop_assert_eq!(parse(&n.to_string()).unwrap(), Value::from(n));
    }

    #[test]
    fn test_pyrope_roundtrip(n in any::<i64>()) {
        let v = Value::from(n);
        prop_assert_eq!(parse(&to_pyrope(&v)).unwrap(), v);
    }

    #[test]
    fn test_sized_pyrope_roundtrip(n in any::<u32>(), width in 32u32..64) {
        let v = parse(&format!("{}u{}bits", n, width)).unwrap();
        prop_assert_eq!(parse(&to_pyrope(&v)).unwrap(), v);
    }

    #[test]
    fn test_yosys_width(n in any::<i64>()) {
        let v = Value::from(n);
        prop_assert_eq!(to_yosys(&v).len() as u32, v.bits());
    }

    #[test]
    fn test_fold_then_store(a in any::<i32>(), b in any::<i32>()) {
        let sum = &Value::from(a) + &Value::from(b);
        prop_assert_eq!(sum.to_i().unwrap(), i64::from(a) + i64::from(b));
        let back = Value::from_container(&sum.to_container()).unwrap();
        prop_assert_eq!(to_verilog(&back), to_verilog(&sum));
    }
}
