//! Literal parser
//!
//! Accepted forms:
//!
//! ```text
//! 123  -7  0d99  1_000          decimal
//! 0b1010  0o17  0xFF            binary / octal / hexadecimal
//! 8u8bits  -3s4bits  0xFFu  7s   sign and width suffixes
//! 0b1?0  0bxx01  0b??u4bits     binary patterns with unknown digits
//! 'text'  "text"  name          strings (quotes are dropped)
//! ```

use crate::error::{ParseError, Result};
use crate::lexer::{lex_suffix, Suffix};
use crate::tables::{digit_value, CHAR_TO_BITS, CHAR_TO_SHIFT};
use lconst_core::{calc_num_bits, Bits, Config, Flags, Value};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

/// Parse a literal with the default configuration
pub fn parse(text: &str) -> Result<Value> {
    parse_with_config(text, &Config::DEFAULT)
}

/// Parse a literal with a custom width ceiling
pub fn parse_with_config(text: &str, config: &Config) -> Result<Value> {
    config.validate()?;
    LiteralParser::new(text, config).parse()
}

/// Strip a leading run of `_`, keeping the text if it is nothing else
fn skip_underscores(text: &str) -> &str {
    let rest = text.trim_start_matches('_');
    if rest.is_empty() {
        text
    } else {
        rest
    }
}

fn is_sign_marker(byte: u8) -> bool {
    matches!(byte, b'u' | b'U' | b's' | b'S')
}

/// Binary digits contain something other than `0`, `1` and `_` before any
/// sign/width suffix
fn has_wildcards(digits: &[u8]) -> bool {
    for &ch in digits {
        match ch {
            b'0' | b'1' | b'_' => continue,
            ch if is_sign_marker(ch) => return false,
            _ => return true,
        }
    }
    false
}

/// Parser state for one literal
struct LiteralParser<'a> {
    literal: &'a str,
    config: &'a Config,
    num: BigInt,
    bits: Bits,
    sign: bool,
    explicit_sign: bool,
    explicit_bits: bool,
}

impl<'a> LiteralParser<'a> {
    fn new(literal: &'a str, config: &'a Config) -> Self {
        Self {
            literal,
            config,
            num: BigInt::zero(),
            bits: 0,
            sign: false,
            explicit_sign: false,
            explicit_bits: false,
        }
    }

    fn malformed(&self, message: impl Into<String>) -> ParseError {
        ParseError::MalformedLiteral {
            literal: self.literal.to_string(),
            message: message.into(),
        }
    }

    fn parse(mut self) -> Result<Value> {
        if self.literal.is_empty() {
            return Err(ParseError::EmptyLiteral);
        }

        let mut txt = self.literal;
        if txt.starts_with('_') {
            let rest = skip_underscores(txt);
            if rest.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
                txt = rest;
            }
        }

        let negative = txt.starts_with('-');
        if negative {
            txt = skip_underscores(&txt[1..]);
        } else if txt.len() > 1 && txt.starts_with('+') && txt.as_bytes()[1].is_ascii_digit() {
            txt = &txt[1..];
        }

        let bytes = txt.as_bytes();
        let shift = if bytes.len() > 2 && bytes[0] == b'0' {
            CHAR_TO_SHIFT[bytes[1] as usize]
        } else {
            0
        };

        if shift == 1 && negative {
            // binary patterns can not be negated
            tracing::debug!("negative binary literal '{}' read as a string", self.literal);
            return self.parse_string();
        }

        if shift == 1 && has_wildcards(&bytes[2..]) {
            return self.parse_pattern(txt);
        }

        if shift != 0 {
            let nbits_used = self.scan_based(txt, shift)?;
            return self.finish(negative, nbits_used);
        }

        if bytes.first().map_or(false, u8::is_ascii_digit) {
            self.scan_decimal(txt)?;
            let nbits_used = self.decimal_bits(negative);
            return self.finish(negative, nbits_used);
        }

        self.parse_string()
    }

    // ========================================================================
    // Scanners
    // ========================================================================

    /// Record a sign/width suffix
    fn process_ending(&mut self, ending: &str) -> Result<()> {
        let Suffix { signed, width } = lex_suffix(ending).map_err(|msg| self.malformed(msg))?;

        self.explicit_sign = true;
        self.sign = signed;

        if let Some(width) = width {
            if width == 0 {
                return Err(self.malformed("the number of bits should be positive"));
            }
            if !self.config.allows(width) {
                return Err(self.malformed(format!("the number of bits is too big {}", width)));
            }
            self.bits = width as Bits;
            self.explicit_bits = true;
        }
        Ok(())
    }

    /// `0b`, `0o` and `0x` digits. Returns the bits used by the digits, where
    /// leading zeros count for nothing.
    fn scan_based(&mut self, txt: &str, shift: u8) -> Result<Bits> {
        let mut nbits_used: Bits = 0;

        for (i, &ch) in txt.as_bytes().iter().enumerate().skip(2) {
            if let Some(val) = digit_value(ch) {
                let needed = CHAR_TO_BITS[ch as usize];
                if needed > shift {
                    return Err(self.malformed(format!(
                        "{} bits needed for '{}'",
                        needed, ch as char
                    )));
                }
                self.num = (std::mem::take(&mut self.num) << shift as usize) | BigInt::from(val);
                nbits_used = if nbits_used == 0 {
                    Bits::from(needed)
                } else {
                    nbits_used + Bits::from(shift)
                };
            } else if ch != b'_' {
                self.process_ending(&txt[i..])?;
                break;
            }
        }

        Ok(nbits_used.max(1))
    }

    /// Decimal digits, with an optional `0d` prefix
    fn scan_decimal(&mut self, txt: &str) -> Result<()> {
        let bytes = txt.as_bytes();
        let start = if bytes.len() > 2 && bytes[0] == b'0' && matches!(bytes[1], b'd' | b'D') {
            2
        } else {
            0
        };

        for (i, &ch) in bytes.iter().enumerate().skip(start) {
            if ch.is_ascii_digit() {
                self.num = std::mem::take(&mut self.num) * 10u32 + u32::from(ch - b'0');
            } else if ch != b'_' {
                self.process_ending(&txt[i..])?;
                break;
            }
        }
        Ok(())
    }

    /// Width needed by a decimal magnitude, once negated if needed
    fn decimal_bits(&self, negative: bool) -> Bits {
        if negative {
            calc_num_bits(&-&self.num, true)
        } else {
            calc_num_bits(&self.num, self.sign)
        }
    }

    /// `0b` digits containing `x`, `z`, `?` or any other symbol
    fn parse_pattern(mut self, txt: &str) -> Result<Value> {
        let mut digits = Vec::with_capacity(txt.len());
        for (i, &ch) in txt.as_bytes().iter().enumerate().skip(2) {
            if ch == b'_' {
                continue;
            }
            if is_sign_marker(ch) {
                self.process_ending(&txt[i..])?;
                break;
            }
            digits.push(ch);
        }

        let nbits_used = digits.len() as Bits;
        if !self.config.allows(u64::from(nbits_used)) {
            return Err(self.malformed(format!("pattern of {} digits is too wide", nbits_used)));
        }
        if self.explicit_bits && self.bits < nbits_used {
            return Err(self.truncation(nbits_used));
        }
        let bits = if self.explicit_bits { self.bits } else { nbits_used };

        tracing::debug!("literal '{}' read as a {}-bit pattern", self.literal, bits);
        let flags = Flags {
            sign: self.sign,
            explicit_sign: self.explicit_sign,
            explicit_bits: true,
            explicit_str: true,
        };
        Ok(Value::new_unchecked(
            BigInt::from_bytes_le(Sign::Plus, &digits),
            bits,
            flags,
        ))
    }

    /// Anything else is a string, packed byte for byte
    fn parse_string(self) -> Result<Value> {
        let mut text = self.literal;
        let quoted = text.len() >= 2
            && (text.starts_with('\'') || text.starts_with('"'))
            && text.as_bytes()[0] == text.as_bytes()[text.len() - 1];
        if quoted {
            text = &text[1..text.len() - 1];
        }
        if text.is_empty() {
            return Err(self.malformed("empty string"));
        }

        let bits = (text.len() as u64) * 8;
        if !self.config.allows(bits) {
            return Err(self.malformed(format!("string of {} bits is too wide", bits)));
        }

        tracing::debug!("literal '{}' read as a string", self.literal);
        Ok(Value::new_unchecked(
            BigInt::from_bytes_le(Sign::Plus, text.as_bytes()),
            bits as Bits,
            Flags::PACKED,
        ))
    }

    fn truncation(&self, needed: Bits) -> ParseError {
        ParseError::Truncation {
            literal: self.literal.to_string(),
            bits: self.bits,
            needed,
        }
    }

    // ========================================================================
    // Final Adjustments
    // ========================================================================

    fn finish(mut self, negative: bool, nbits_used: Bits) -> Result<Value> {
        if self.explicit_bits && self.bits < nbits_used {
            return Err(self.truncation(nbits_used));
        }

        if negative {
            self.num = -std::mem::take(&mut self.num);
            if !self.explicit_sign {
                self.sign = true;
            }
        }

        if self.explicit_bits {
            if self.explicit_sign && self.num.is_negative() {
                // two's-complement representative within the explicit width
                let mask = (BigInt::one() << self.bits as usize) - BigInt::one();
                self.num = &self.num & &mask;
            }
        } else {
            self.bits = calc_num_bits(&self.num, self.sign);
        }

        let flags = Flags {
            sign: self.sign,
            explicit_sign: self.explicit_sign,
            explicit_bits: self.explicit_bits,
            explicit_str: false,
        };
        Ok(Value::new_unchecked(self.num, self.bits, flags))
    }
}
