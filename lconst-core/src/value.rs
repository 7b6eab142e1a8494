//! # Constant Value
//!
//! The [`Value`] type is the single canonical form of every literal. A value
//! is immutable: folding and decoding always produce a fresh value.
//!
//! ## Representation
//!
//! ```text
//! explicit_str = false   num is a two's-complement integer of width `bits`,
//!                        read as signed or unsigned according to `sign`
//! explicit_str = true    num packs bytes little-endian: byte i of the text
//!                        occupies bits [8i, 8i+8) of num
//! ```
//!
//! A packed value is either a *pure string* (`bits == 8 * len`) coming from
//! a quoted literal, or a *bit pattern* (one byte per binary digit, digits
//! printed most significant first) coming from a `0b` literal with `x`, `z`
//! or `?` digits.

use crate::error::{LconstError, Result};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;

/// Bit width of a value
pub type Bits = u32;

/// Exclusive width ceiling (widths are stored in a 24-bit container field)
pub const BITS_MAX: Bits = 1 << 24;

/// Digit used for unknown bits in fully unknown patterns
pub const UNKNOWN_DIGIT: u8 = b'?';

// ============================================================================
// Flags
// ============================================================================

/// Signedness and provenance flags of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags {
    /// The value lives in a signed domain
    pub sign: bool,
    /// Signedness was stated by the literal (`u`/`s` suffix)
    pub explicit_sign: bool,
    /// Width was stated by the literal (or fixed by truncation)
    pub explicit_bits: bool,
    /// The number is a packed string or bit pattern
    pub explicit_str: bool,
}

impl Flags {
    /// Flags of a packed string or bit pattern
    pub const PACKED: Self = Self {
        sign: false,
        explicit_sign: false,
        explicit_bits: true,
        explicit_str: true,
    };
}

// ============================================================================
// Width Inference
// ============================================================================

/// Minimal width that holds `num` without loss.
///
/// Signed values need the smallest `b` with `-2^(b-1) <= num <= 2^(b-1)-1`,
/// unsigned values the smallest `b` with `num < 2^b`. Negative numbers always
/// use the signed rule. The result is never below 1.
pub fn calc_num_bits(num: &BigInt, signed: bool) -> Bits {
    if num.is_negative() {
        let magnitude = -num - BigInt::one();
        return magnitude.bits() as Bits + 1;
    }

    let used = num.bits() as Bits;
    if signed {
        used + 1
    } else {
        used.max(1)
    }
}

// ============================================================================
// Value
// ============================================================================

/// Canonical constant value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Value {
    num: BigInt,
    bits: Bits,
    flags: Flags,
}

impl Default for Value {
    /// Unsigned zero, one bit wide
    fn default() -> Self {
        Self {
            num: BigInt::zero(),
            bits: 1,
            flags: Flags::default(),
        }
    }
}

impl Value {
    /// Create a value from raw parts (caller upholds `bits >= 1` and the
    /// packing rules implied by `flags.explicit_str`)
    #[inline]
    pub fn new_unchecked(num: BigInt, bits: Bits, flags: Flags) -> Self {
        Self { num, bits, flags }
    }

    /// Pure string value: every byte is kept, width is `8 * len`
    pub fn from_str_bytes(bytes: &[u8]) -> Result<Self> {
        let bits = (bytes.len() as u64) * 8;
        if bits == 0 || bits >= BITS_MAX as u64 {
            return Err(LconstError::InvalidWidth { bits });
        }
        Ok(Self {
            num: BigInt::from_bytes_le(Sign::Plus, bytes),
            bits: bits as Bits,
            flags: Flags::PACKED,
        })
    }

    /// Bit pattern value, one digit per bit, most significant digit first.
    ///
    /// A pattern made only of `0` and `1` folds into the unsigned number it
    /// spells. An empty pattern is zero.
    pub fn from_pattern(digits: &[u8]) -> Self {
        if digits.is_empty() {
            return Self::default();
        }

        if digits.iter().all(|d| matches!(d, b'0' | b'1')) {
            let num = digits.iter().fold(BigInt::zero(), |acc, d| {
                (acc << 1usize) | BigInt::from(d - b'0')
            });
            return Self::from(num);
        }

        Self {
            num: BigInt::from_bytes_le(Sign::Plus, digits),
            bits: digits.len() as Bits,
            flags: Flags::PACKED,
        }
    }

    /// Fully unknown pattern (`?` repeated `bits` times)
    pub fn unknown(bits: Bits) -> Self {
        let bits = bits.max(1);
        let digits = vec![UNKNOWN_DIGIT; bits as usize];
        Self {
            num: BigInt::from_bytes_le(Sign::Plus, &digits),
            bits,
            flags: Flags::PACKED,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn num(&self) -> &BigInt {
        &self.num
    }

    #[inline]
    pub fn bits(&self) -> Bits {
        self.bits
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        self.flags.sign
    }

    #[inline]
    pub fn has_explicit_sign(&self) -> bool {
        self.flags.explicit_sign
    }

    #[inline]
    pub fn has_explicit_bits(&self) -> bool {
        self.flags.explicit_bits
    }

    /// Packed string or bit pattern
    #[inline]
    pub fn is_string(&self) -> bool {
        self.flags.explicit_str
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Packed string whose width is exactly eight bits per byte
    pub fn is_pure_string(&self) -> bool {
        self.flags.explicit_str && self.packed_bytes().len() as u64 * 8 == self.bits as u64
    }

    /// Signed value whose stored pattern has the top bit of its width set
    /// (e.g. `-3s4bits`, stored as 13)
    pub fn is_logically_negative(&self) -> bool {
        if self.flags.explicit_str || !self.flags.sign {
            return false;
        }
        if self.num.is_negative() {
            return true;
        }
        match u64::from(self.bits).checked_sub(1) {
            Some(top) => self.num.magnitude().bit(top),
            None => false,
        }
    }

    /// Numeric value that fits a native integer
    pub fn is_i(&self) -> bool {
        !self.flags.explicit_str && self.num.to_i64().is_some()
    }

    /// Convert to a native integer
    pub fn to_i(&self) -> Result<i64> {
        if self.flags.explicit_str {
            return Err(LconstError::NotRepresentable {
                value: self.unpack_string()?,
            });
        }
        self.num.to_i64().ok_or_else(|| LconstError::NotRepresentable {
            value: self.num.to_string(),
        })
    }

    // ========================================================================
    // Packed Strings
    // ========================================================================

    /// Little-endian byte unpacking, stops at the highest non-zero byte
    pub(crate) fn packed_bytes(&self) -> Vec<u8> {
        if self.num.is_zero() {
            return Vec::new();
        }
        self.num.magnitude().to_bytes_le()
    }

    /// Bytes of a packed string or pattern, first character first
    pub fn unpack_bytes(&self) -> Result<Vec<u8>> {
        if !self.flags.explicit_str {
            return Err(LconstError::NotAString);
        }
        Ok(self.packed_bytes())
    }

    /// Text of a packed string or pattern
    pub fn unpack_string(&self) -> Result<String> {
        let bytes = self.unpack_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Text of a packed string or pattern with `x` and `z` replaced by `0`
    pub fn unpack_string_no_xz(&self) -> Result<String> {
        let bytes: Vec<u8> = self
            .unpack_bytes()?
            .into_iter()
            .map(|b| if b == b'x' || b == b'z' { b'0' } else { b })
            .collect();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<BigInt> for Value {
    fn from(num: BigInt) -> Self {
        let sign = num.is_negative();
        let bits = calc_num_bits(&num, sign);
        Self {
            num,
            bits,
            flags: Flags {
                sign,
                ..Flags::default()
            },
        }
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Self::from(BigInt::from(val))
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Self::from(BigInt::from(val))
    }
}

impl From<u64> for Value {
    fn from(val: u64) -> Self {
        Self::from(BigInt::from(val))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.explicit_str {
            let text = String::from_utf8_lossy(&self.packed_bytes()).into_owned();
            write!(f, "str:{} bits:{}", text, self.bits)
        } else {
            write!(
                f,
                "num:{} sign:{} bits:{} explicit_bits:{} explicit_sign:{}",
                self.num,
                self.flags.sign,
                self.bits,
                self.flags.explicit_bits,
                self.flags.explicit_sign
            )
        }
    }
}
