//! # Constant Emitters
//!
//! Render [`lconst_core::Value`]s as literals of the downstream dialects.
//!
//! | dialect | string value | numeric value |
//! |---|---|---|
//! | Pyrope | `'text'` or `0b<pattern>` + suffix | decimal, or `0x` hex when sized or above 63, + suffix |
//! | Verilog | `"text"` or `[width]'b<pattern>` | `[width]'h<hex>`, `'sh` when logically negative, `'sb<digits>` when negative |
//! | FIRRTL | raw text, or the pattern as decimal with unknowns as 0 | signed decimal |
//! | Yosys | raw text | exactly `bits` binary digits |
//!
//! ## Example
//!
//! ```rust
//! use lconst_core::Value;
//! use lconst_emit::{emit, Dialect};
//!
//! let v = Value::from(-3i64);
//! assert_eq!(emit(&v, Dialect::Verilog), "'sb101");
//! assert_eq!(emit(&v, Dialect::Firrtl), "-3");
//! ```

pub mod error;
pub mod dialect;
pub mod pyrope;
pub mod verilog;
pub mod firrtl;
pub mod yosys;

pub use error::{EmitError, Result};
pub use dialect::{emit, Dialect};
pub use firrtl::to_firrtl;
pub use pyrope::to_pyrope;
pub use verilog::to_verilog;
pub use yosys::to_yosys;
