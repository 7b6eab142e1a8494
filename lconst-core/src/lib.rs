//! # Hardware Constant Values
//!
//! Canonical representation of the literals found in hardware descriptions.
//!
//! ## Key Features
//! - Arbitrary precision two's-complement numbers with explicit or inferred width
//! - Explicit or inferred signedness
//! - Packed string mode for quoted strings and `0b` patterns with `x`, `z` or `?` digits
//! - Constant folding (add, sub, shifts, or, and, equality, truncation)
//! - Compact binary container and 64-bit content hash
//!
//! ## Example
//!
//! ```rust
//! use lconst_core::Value;
//!
//! let a = Value::from(200);
//! let b = Value::from(100);
//! let sum = a.add_op(&b);
//! assert_eq!(sum.to_i().unwrap(), 300);
//! assert_eq!(sum.bits(), 9);
//!
//! let bytes = sum.to_container();
//! assert_eq!(Value::from_container(&bytes).unwrap(), sum);
//! ```

pub mod config;
pub mod error;
pub mod value;
pub mod arith;
pub mod encoding;

pub use config::{Config, ConfigError};
pub use error::{LconstError, Result};
pub use value::{calc_num_bits, Bits, Flags, Value, BITS_MAX};
pub use encoding::Container;
