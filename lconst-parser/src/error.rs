//! Parser errors

use lconst_core::{Bits, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Empty literal")]
    EmptyLiteral,

    #[error("Malformed literal '{literal}': {message}")]
    MalformedLiteral { literal: String, message: String },

    #[error("Literal '{literal}' needs {needed} bits but only {bits} were requested")]
    Truncation {
        literal: String,
        bits: Bits,
        needed: Bits,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ParseError>;
