//! # Binary Container and Content Hash
//!
//! ## Container Format
//!
//! ```text
//! Offset  Size  Field
//! ──────────────────────────────────
//! 0x00    1     flags
//! 0x01    3     bits (big-endian, 24 bits)
//! 0x04    n     |num| (big-endian bytes)
//! ```
//!
//! ## Flags Byte
//!
//! ```text
//! bit 0: num is negative
//! bit 1: sign
//! bit 2: explicit_bits
//! bit 3: explicit_sign
//! bit 4: explicit_str
//! ```

use crate::error::{LconstError, Result};
use crate::value::{Bits, Flags, Value};
use num_bigint::{BigInt, BigUint, Sign};
use rustc_hash::FxHasher;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hasher;

/// Serialized value bytes
pub type Container = Vec<u8>;

// ============================================================================
// Flag Bits
// ============================================================================

pub const FLAG_NEGATIVE: u8 = 0x01;
pub const FLAG_SIGN: u8 = 0x02;
pub const FLAG_EXPLICIT_BITS: u8 = 0x04;
pub const FLAG_EXPLICIT_SIGN: u8 = 0x08;
pub const FLAG_EXPLICIT_STR: u8 = 0x10;

/// Flags byte plus the 24-bit width field
pub const HEADER_SIZE: usize = 4;

/// Width field mask (24 bits)
pub const BITS_FIELD_MASK: u32 = 0xFF_FFFF;

/// Pack flags and the negative marker into the flags byte
#[inline]
pub const fn encode_flags(flags: Flags, negative: bool) -> u8 {
    (if flags.explicit_str { FLAG_EXPLICIT_STR } else { 0 })
        | (if flags.explicit_sign { FLAG_EXPLICIT_SIGN } else { 0 })
        | (if flags.explicit_bits { FLAG_EXPLICIT_BITS } else { 0 })
        | (if flags.sign { FLAG_SIGN } else { 0 })
        | (if negative { FLAG_NEGATIVE } else { 0 })
}

/// Unpack the flags byte into flags and the negative marker
#[inline]
pub const fn decode_flags(byte: u8) -> (Flags, bool) {
    let flags = Flags {
        sign: byte & FLAG_SIGN != 0,
        explicit_sign: byte & FLAG_EXPLICIT_SIGN != 0,
        explicit_bits: byte & FLAG_EXPLICIT_BITS != 0,
        explicit_str: byte & FLAG_EXPLICIT_STR != 0,
    };
    (flags, byte & FLAG_NEGATIVE != 0)
}

// ============================================================================
// Container Codec
// ============================================================================

impl Value {
    /// Serialize to container bytes
    pub fn to_container(&self) -> Container {
        debug_assert!(self.bits() <= BITS_FIELD_MASK, "width exceeds the container field");
        let bits = self.bits() & BITS_FIELD_MASK;
        let magnitude = self.num().magnitude().to_bytes_be();

        let mut bytes = Vec::with_capacity(HEADER_SIZE + magnitude.len());
        bytes.push(encode_flags(self.flags(), self.is_negative()));
        bytes.push((bits >> 16) as u8);
        bytes.push((bits >> 8) as u8);
        bytes.push(bits as u8);
        bytes.extend_from_slice(&magnitude);
        bytes
    }

    /// Deserialize from container bytes (a missing magnitude reads as zero)
    pub fn from_container(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            tracing::debug!("container too short: {} bytes", bytes.len());
            return Err(LconstError::InvalidContainer { len: bytes.len() });
        }

        let (flags, negative) = decode_flags(bytes[0]);
        let bits: Bits =
            (u32::from(bytes[1]) << 16) | (u32::from(bytes[2]) << 8) | u32::from(bytes[3]);
        if bits == 0 {
            tracing::debug!("container holds a zero width");
            return Err(LconstError::InvalidWidth { bits: 0 });
        }

        let magnitude = BigUint::from_bytes_be(&bytes[HEADER_SIZE..]);
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let num = BigInt::from_biguint(sign, magnitude);

        Ok(Value::new_unchecked(num, bits, flags))
    }

    /// 64-bit content hash for deduplication (not cryptographic)
    pub fn content_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();

        let head = u64::from(encode_flags(self.flags(), self.is_negative()));
        hasher.write_u64((head << 32) | u64::from(self.bits()));
        for chunk in self.num().magnitude().iter_u64_digits() {
            hasher.write_u64(chunk);
        }

        hasher.finish()
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_container())
    }
}

struct ContainerVisitor;

impl<'de> Visitor<'de> for ContainerVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "constant value container bytes")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<Value, E> {
        Value::from_container(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(HEADER_SIZE));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Value::from_container(&bytes).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Value, D::Error> {
        deserializer.deserialize_bytes(ContainerVisitor)
    }
}
