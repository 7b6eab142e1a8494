//! # Digit Lookup Tables
//!
//! Read-only byte tables used while scanning literals.

/// Digit value of each byte, `-1` when the byte is not a hex digit
pub static CHAR_TO_VAL: [i8; 256] = build_char_to_val();

/// Bits needed to hold each digit on its own (`0` needs none, `7` needs 3)
pub static CHAR_TO_BITS: [u8; 256] = build_char_to_bits();

/// Bits per digit for the character after a leading `0` (`b`, `o`, `x`)
pub static CHAR_TO_SHIFT: [u8; 256] = build_char_to_shift();

const fn build_char_to_val() -> [i8; 256] {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as i8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as i8;
        table[b'A' as usize + i] = 10 + i as i8;
        i += 1;
    }
    table
}

const fn build_char_to_bits() -> [u8; 256] {
    let vals = build_char_to_val();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        if vals[i] >= 0 {
            table[i] = (8 - (vals[i] as u8).leading_zeros()) as u8;
        }
        i += 1;
    }
    table
}

const fn build_char_to_shift() -> [u8; 256] {
    let mut table = [0u8; 256];
    table[b'b' as usize] = 1;
    table[b'B' as usize] = 1;
    table[b'o' as usize] = 3;
    table[b'O' as usize] = 3;
    table[b'x' as usize] = 4;
    table[b'X' as usize] = 4;
    table
}

/// Digit value of a byte, if it is a hex digit
#[inline]
pub fn digit_value(byte: u8) -> Option<u8> {
    let val = CHAR_TO_VAL[byte as usize];
    if val >= 0 {
        Some(val as u8)
    } else {
        None
    }
}
