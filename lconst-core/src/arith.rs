//! # Constant Folding
//!
//! Binary operations over two values. Numeric operands follow two's-complement
//! semantics and re-infer the result width. Packed operands (strings and bit
//! patterns) can not be evaluated at compile time in general, so most
//! operations degrade to a fully unknown pattern as wide as the widest
//! operand.

use crate::error::{LconstError, Result};
use crate::value::{calc_num_bits, Bits, Flags, Value, BITS_MAX, UNKNOWN_DIGIT};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use std::ops::{Add, BitAnd, BitOr, Shl, Shr, Sub};

impl Value {
    /// Flags and width of a numeric result.
    ///
    /// Explicit sign survives only when both operands state the same sign.
    /// The width is always re-inferred.
    fn combine(&self, res: BigInt, other: &Value) -> Value {
        let explicit_sign =
            self.has_explicit_sign() && other.has_explicit_sign() && self.is_signed() == other.is_signed();
        let sign = if explicit_sign {
            self.is_signed()
        } else {
            res < BigInt::zero()
        };
        let flags = Flags {
            sign,
            explicit_sign,
            explicit_bits: false,
            explicit_str: self.is_string() && other.is_string(),
        };
        let bits = calc_num_bits(&res, sign);
        if bits >= BITS_MAX {
            return Value::overflow("fold");
        }
        Value::new_unchecked(res, bits, flags)
    }

    /// Result too wide for any value: fully unknown at the widest width
    fn overflow(op: &str) -> Value {
        tracing::trace!("{} result reaches {} bits, degrades to unknown", op, BITS_MAX);
        Value::unknown(BITS_MAX - 1)
    }

    fn degrade(&self, other: &Value, op: &str) -> Value {
        let bits = self.bits().max(other.bits());
        tracing::trace!("{} on packed operands degrades to {} unknown bits", op, bits);
        Value::unknown(bits)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Addition. Two pure strings concatenate (`self` first); any other
    /// packed operand makes the result unknown.
    pub fn add_op(&self, other: &Value) -> Value {
        if self.is_string() || other.is_string() {
            if self.is_pure_string() && other.is_pure_string() {
                let mut bytes = self.packed_bytes();
                bytes.extend(other.packed_bytes());
                if let Ok(joined) = Value::from_str_bytes(&bytes) {
                    return joined;
                }
            }
            return self.degrade(other, "add");
        }

        self.combine(self.num() + other.num(), other)
    }

    /// Subtraction. Any packed operand makes the result unknown.
    pub fn sub_op(&self, other: &Value) -> Value {
        if self.is_string() || other.is_string() {
            return self.degrade(other, "sub");
        }

        self.combine(self.num() - other.num(), other)
    }

    // ========================================================================
    // Shifts
    // ========================================================================

    /// Left shift. A packed value gets `amount` zero digits appended.
    pub fn lsh_op(&self, amount: Bits) -> Value {
        if self.is_string() {
            let bits = u64::from(self.bits()) + u64::from(amount);
            if bits >= u64::from(BITS_MAX) {
                return Value::overflow("lsh");
            }
            let mut digits = self.packed_bytes();
            digits.extend(std::iter::repeat(b'0').take(amount as usize));
            let bits = bits as Bits;
            return Value::new_unchecked(BigInt::from_bytes_le(Sign::Plus, &digits), bits, self.flags());
        }

        if !self.num().is_zero() {
            // a non-zero number grows by exactly `amount` bits
            let needed = u64::from(calc_num_bits(self.num(), self.is_signed())) + u64::from(amount);
            if needed >= u64::from(BITS_MAX) {
                return Value::overflow("lsh");
            }
        }

        let res = self.num() << amount as usize;
        let bits = calc_num_bits(&res, self.is_signed());
        Value::new_unchecked(res, bits, self.flags())
    }

    /// Right shift. A packed value loses its first `amount` printed
    /// characters; a pattern shifted to nothing is zero.
    pub fn rsh_op(&self, amount: Bits) -> Value {
        if self.is_string() {
            let digits = self.packed_bytes();
            let kept = digits.get(amount as usize..).unwrap_or_default();
            if kept.is_empty() {
                return Value::default();
            }
            let bits = self.bits().saturating_sub(amount).max(1);
            return Value::new_unchecked(BigInt::from_bytes_le(Sign::Plus, kept), bits, self.flags());
        }

        let res = self.num() >> amount as usize;
        let bits = calc_num_bits(&res, self.is_signed());
        Value::new_unchecked(res, bits, self.flags())
    }

    // ========================================================================
    // Bitwise
    // ========================================================================

    /// Merge two patterns digit by digit, starting from the first packed
    /// byte. `dominant` wins over everything, `?` wins over the rest, and
    /// the longer pattern's extra high bytes are kept.
    fn merge_patterns(&self, other: &Value, dominant: u8) -> Value {
        let lhs = self.packed_bytes();
        let rhs = other.packed_bytes();
        let (mut longer, shorter) = if lhs.len() > rhs.len() {
            (lhs, rhs)
        } else {
            (rhs, lhs)
        };

        for (slot, &ch) in longer.iter_mut().zip(shorter.iter()) {
            if *slot == dominant || ch == dominant {
                *slot = dominant;
            } else if *slot == UNKNOWN_DIGIT || ch == UNKNOWN_DIGIT {
                *slot = UNKNOWN_DIGIT;
            }
        }

        Value::from_pattern(&longer)
    }

    /// Bitwise OR
    pub fn or_op(&self, other: &Value) -> Value {
        match (self.is_string(), other.is_string()) {
            (true, true) => self.merge_patterns(other, b'1'),
            (false, false) => self.combine(self.num() | other.num(), other),
            _ => self.degrade(other, "or"),
        }
    }

    /// Bitwise AND
    pub fn and_op(&self, other: &Value) -> Value {
        match (self.is_string(), other.is_string()) {
            (true, true) => self.merge_patterns(other, b'0'),
            (false, false) => self.combine(self.num() & other.num(), other),
            _ => self.degrade(other, "and"),
        }
    }

    // ========================================================================
    // Comparison and Truncation
    // ========================================================================

    /// Equality after masking one operand with the other, so that `-1` and
    /// `255` compare equal.
    pub fn eq_op(&self, other: &Value) -> Result<bool> {
        if self.is_string() || other.is_string() {
            return Err(LconstError::UndefinedComparison);
        }

        let lhs = self.num();
        let rhs = other.num();
        let masked = lhs & rhs;
        let zero = BigInt::zero();

        let equal = if *lhs < zero && *rhs > zero {
            masked == *rhs
        } else if *lhs > zero && *rhs < zero {
            masked == *lhs
        } else {
            masked == *lhs && masked == *rhs
        };
        Ok(equal)
    }

    /// Keep the low `amount` bits. The width is re-derived from the masked
    /// number and never exceeds `amount`.
    pub fn adjust_bits(&self, amount: Bits) -> Result<Value> {
        if amount == 0 || amount >= BITS_MAX {
            return Err(LconstError::InvalidWidth {
                bits: u64::from(amount),
            });
        }

        if self.is_string() {
            tracing::trace!("truncating a packed value degrades to {} unknown bits", amount);
            return Ok(Value::unknown(amount));
        }

        let mask = (BigInt::one() << amount as usize) - BigInt::one();
        let res = self.num() & mask;
        let bits = calc_num_bits(&res, self.is_signed()).min(amount);
        let flags = Flags {
            explicit_bits: true,
            ..self.flags()
        };
        Ok(Value::new_unchecked(res, bits, flags))
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        self.add_op(rhs)
    }
}

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        self.sub_op(rhs)
    }
}

impl BitOr for &Value {
    type Output = Value;

    fn bitor(self, rhs: &Value) -> Value {
        self.or_op(rhs)
    }
}

impl BitAnd for &Value {
    type Output = Value;

    fn bitand(self, rhs: &Value) -> Value {
        self.and_op(rhs)
    }
}

impl Shl<Bits> for &Value {
    type Output = Value;

    fn shl(self, amount: Bits) -> Value {
        self.lsh_op(amount)
    }
}

impl Shr<Bits> for &Value {
    type Output = Value;

    fn shr(self, amount: Bits) -> Value {
        self.rsh_op(amount)
    }
}
