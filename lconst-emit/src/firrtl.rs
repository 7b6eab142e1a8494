//! FIRRTL literals
//!
//! FIRRTL only takes plain decimal digits, without base markers and without
//! unknown bits.

use lconst_core::Value;
use num_bigint::BigUint;

/// Decimal text of a value
pub fn to_firrtl(value: &Value) -> String {
    if let Ok(text) = value.unpack_string_no_xz() {
        if value.is_pure_string() {
            return text;
        }

        // unknown digits read as zero
        let digits: Vec<u8> = text
            .bytes()
            .map(|b| if b == b'1' { b'1' } else { b'0' })
            .collect();
        return BigUint::parse_bytes(&digits, 2)
            .unwrap_or_default()
            .to_string();
    }

    value.num().to_string()
}
