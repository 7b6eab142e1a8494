//! # Configuration for Constant Values
//!
//! Limits applied when literals are turned into values. The binary container
//! stores widths in a 24-bit field, so no configuration may raise the width
//! ceiling above [`BITS_MAX`].

use crate::value::{Bits, BITS_MAX};
use std::fmt;

/// Limits applied while building values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Exclusive upper bound for explicit widths (1 to 2^24)
    pub max_bits: Bits,
}

impl Config {
    /// Default configuration: every width the container can store
    pub const DEFAULT: Self = Self { max_bits: BITS_MAX };

    /// Create a new configuration with validation
    pub const fn new(max_bits: Bits) -> Result<Self, ConfigError> {
        if max_bits < 2 {
            return Err(ConfigError::ZeroMaxBits);
        }
        if max_bits > BITS_MAX {
            return Err(ConfigError::MaxBitsTooLarge);
        }
        Ok(Self { max_bits })
    }

    /// Check whether an explicit width is allowed
    #[inline]
    pub const fn allows(&self, bits: u64) -> bool {
        bits > 0 && bits < self.max_bits as u64
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bits < 2 {
            return Err(ConfigError::ZeroMaxBits);
        }
        if self.max_bits > BITS_MAX {
            return Err(ConfigError::MaxBitsTooLarge);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config {{ widths: 1..{} bits }}", self.max_bits)
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The ceiling must leave room for 1-bit values
    ZeroMaxBits,
    /// The ceiling must fit the 24-bit container field
    MaxBitsTooLarge,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroMaxBits => {
                write!(f, "max_bits must be at least 2")
            }
            ConfigError::MaxBitsTooLarge => {
                write!(f, "max_bits must not exceed 2^24")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
