//! Dialect selection

use crate::error::{EmitError, Result};
use lconst_core::Value;
use std::fmt;
use std::str::FromStr;

/// Downstream text dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Pyrope,
    Verilog,
    Firrtl,
    Yosys,
}

impl Dialect {
    /// Every dialect, in emission order
    pub const ALL: [Dialect; 4] = [
        Dialect::Pyrope,
        Dialect::Verilog,
        Dialect::Firrtl,
        Dialect::Yosys,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Pyrope => "pyrope",
            Dialect::Verilog => "verilog",
            Dialect::Firrtl => "firrtl",
            Dialect::Yosys => "yosys",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pyrope" | "prp" => Ok(Dialect::Pyrope),
            "verilog" | "v" => Ok(Dialect::Verilog),
            "firrtl" | "fir" => Ok(Dialect::Firrtl),
            "yosys" => Ok(Dialect::Yosys),
            _ => Err(EmitError::UnknownDialect(s.to_string())),
        }
    }
}

/// Render a value in the given dialect
pub fn emit(value: &Value, dialect: Dialect) -> String {
    match dialect {
        Dialect::Pyrope => crate::pyrope::to_pyrope(value),
        Dialect::Verilog => crate::verilog::to_verilog(value),
        Dialect::Firrtl => crate::firrtl::to_firrtl(value),
        Dialect::Yosys => crate::yosys::to_yosys(value),
    }
}
