//! Emitter tests driven by parsed literals

use lconst_core::Value;
use lconst_emit::{emit, to_firrtl, to_pyrope, to_verilog, to_yosys, Dialect};
use lconst_parser::parse;

fn lit(text: &str) -> Value {
    parse(text).unwrap_or_else(|e| panic!("literal {:?} failed: {}", text, e))
}

/// Expected text per dialect for a literal: pyrope, verilog, firrtl, yosys
fn check(text: &str, expected: [&str; 4]) {
    let v = lit(text);
    for (dialect, want) in Dialect::ALL.iter().zip(expected) {
        assert_eq!(emit(&v, *dialect), want, "{} of {}", dialect, text);
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_small_unsigned() {
    check("5", ["5", "'h5", "5", "101"]);
    check("0", ["0", "'h0", "0", "0"]);
}

#[test]
fn test_large_unsigned() {
    check("100", ["0x64", "'h64", "100", "1100100"]);
}

#[test]
fn test_negative() {
    check("-3", ["-3", "'sb101", "-3", "101"]);
    check("-100", ["-100", "'sb10011100", "-100", "10011100"]);
}

#[test]
fn test_explicit_unsigned_width() {
    check("8u8bits", ["0x8u8bits", "8'h8", "8", "00001000"]);
    check("-1u8bits", ["0xffu8bits", "8'hff", "255", "11111111"]);
}

#[test]
fn test_explicit_signed_width() {
    check("-3s4bits", ["0xds4bits", "4'shd", "13", "1101"]);
    check("3s4bits", ["0x3s4bits", "4'h3", "3", "0011"]);
}

#[test]
fn test_sign_without_width() {
    check("5s", ["5s", "'h5", "5", "0101"]);
    check("0xFFs", ["0xffs", "'hff", "255", "011111111"]);
}

#[test]
fn test_one_bit_suffix() {
    assert_eq!(to_pyrope(&lit("1u1")), "0x1u1bit");
}

// ============================================================================
// Strings and Patterns
// ============================================================================

#[test]
fn test_pure_string() {
    check("'hello'", ["'hello'", "\"hello\"", "hello", "hello"]);
}

#[test]
fn test_pattern() {
    check("0b1?0", ["0b1?0u3bits", "3'b1?0", "4", "1?0"]);
    check("0bx1z", ["0bx1zu3bits", "3'bx1z", "2", "x1z"]);
}

#[test]
fn test_unknown_result() {
    let v = &lit("0b1?0") + &lit("1");
    assert_eq!(to_verilog(&v), "3'b???");
    assert_eq!(to_firrtl(&v), "0");
    assert_eq!(to_yosys(&v), "???");
}

// ============================================================================
// Pyrope Round Trip
// ============================================================================

#[test]
fn test_pyrope_reparses_to_same_value() {
    for text in [
        "0", "5", "63", "64", "-64", "-3", "1000", "8u8bits", "-1u8bits", "-3s4bits", "5s", "0xFFs",
        "7u", "'abc'",
    ] {
        let v = lit(text);
        assert_eq!(lit(&to_pyrope(&v)), v, "literal {}", text);
    }
}

#[test]
fn test_pyrope_pattern_is_stable() {
    let first = to_pyrope(&lit("0b1?0"));
    let second = to_pyrope(&lit(&first));
    assert_eq!(first, second);
}
