//! # Error Types for Constant Values

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LconstError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Folding errors
    #[error("Undefined comparison: values with unknown digits can not be compared at compile time")]
    UndefinedComparison,

    #[error("Value {value} does not fit in a native integer")]
    NotRepresentable { value: String },

    #[error("Value is not a string or bit pattern")]
    NotAString,

    #[error("Invalid bit width: {bits}")]
    InvalidWidth { bits: u64 },

    // Container errors
    #[error("Invalid container: expected at least 4 bytes, found {len}")]
    InvalidContainer { len: usize },
}

pub type Result<T> = std::result::Result<T, LconstError>;
