//! Verilog literals

use crate::yosys::binary_digits;
use lconst_core::Value;
use num_traits::Signed;

/// Verilog text of a value
pub fn to_verilog(value: &Value) -> String {
    if let Ok(text) = value.unpack_string() {
        if value.is_pure_string() {
            return format!("\"{}\"", text);
        }
        if value.has_explicit_bits() {
            return format!("{}'b{}", value.bits(), text);
        }
        return format!("'b{}", text);
    }

    let mut out = String::new();
    if value.has_explicit_bits() {
        out.push_str(&value.bits().to_string());
    }

    let num = value.num();
    if num.is_negative() {
        out.push_str("'sb");
        out.push_str(&binary_digits(num, value.bits()));
    } else if value.is_logically_negative() {
        out.push_str(&format!("'sh{:x}", num.magnitude()));
    } else {
        out.push_str(&format!("'h{:x}", num.magnitude()));
    }
    out
}
