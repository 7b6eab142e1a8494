//! Hardware Literal Parser
//!
//! Turn literal text into canonical [`lconst_core::Value`]s.
//!
//! ## Example
//!
//! ```rust
//! use lconst_parser::parse;
//!
//! let v = parse("8u8bits").unwrap();
//! assert_eq!(v.bits(), 8);
//! assert!(!v.is_signed());
//!
//! let pattern = parse("0b1?0").unwrap();
//! assert!(pattern.is_string());
//! ```

pub mod error;
pub mod tables;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, Result};
pub use parser::{parse, parse_with_config};
