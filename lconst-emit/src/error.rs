//! Emitter errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}

pub type Result<T> = std::result::Result<T, EmitError>;
