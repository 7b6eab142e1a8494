//! Yosys constant strings

use lconst_core::{Bits, Value};
use num_bigint::BigInt;

/// Two's-complement digits of `num`, exactly `bits` wide, most significant first
pub(crate) fn binary_digits(num: &BigInt, bits: Bits) -> String {
    (0..u64::from(bits))
        .rev()
        .map(|i| if num.bit(i) { '1' } else { '0' })
        .collect()
}

/// Raw packed text, or the binary digits of the number
pub fn to_yosys(value: &Value) -> String {
    match value.unpack_string() {
        Ok(text) => text,
        Err(_) => binary_digits(value.num(), value.bits()),
    }
}
