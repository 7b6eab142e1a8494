//! Pyrope literals

use lconst_core::Value;
use num_bigint::BigInt;
use num_traits::Signed;

/// `u`/`s` marker plus the width when either was explicit
fn push_width_suffix(value: &Value, out: &mut String) {
    if !value.has_explicit_sign() && !value.has_explicit_bits() {
        return;
    }

    out.push(if value.is_signed() { 's' } else { 'u' });

    if value.has_explicit_bits() {
        let bits = value.bits();
        out.push_str(&bits.to_string());
        out.push_str(if bits > 1 { "bits" } else { "bit" });
    }
}

/// Pyrope text of a value
pub fn to_pyrope(value: &Value) -> String {
    if let Ok(text) = value.unpack_string() {
        if value.is_pure_string() {
            return format!("'{}'", text);
        }
        let mut out = format!("0b{}", text);
        push_width_suffix(value, &mut out);
        return out;
    }

    let num = value.num();
    let hex = value.has_explicit_bits() || *num > BigInt::from(63);

    let mut out = String::new();
    if num.is_negative() {
        out.push('-');
    }
    if hex {
        out.push_str(&format!("0x{:x}", num.magnitude()));
    } else {
        out.push_str(&num.magnitude().to_string());
    }

    push_width_suffix(value, &mut out);
    out
}
