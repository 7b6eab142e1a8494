//! # Lexer for Sign and Width Suffixes
//!
//! Suffix grammar: `[uUsS] _* [0-9]+ ("bit" | "bits")?`, e.g. `u8bits`,
//! `s_4`, `U`.

use logos::Logos;

/// Tokens of a sign/width suffix
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"_+")] // Skip separators
pub enum SuffixToken {
    /// Unsigned marker
    #[regex(r"[uU]")]
    Unsigned,

    /// Signed marker
    #[regex(r"[sS]")]
    Signed,

    /// Width in bits
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Width(u64),

    /// Optional unit after the width
    #[token("bit")]
    #[token("bits")]
    Unit,
}

/// Parsed suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix {
    pub signed: bool,
    pub width: Option<u64>,
}

/// Lex a complete suffix, returning a message describing the first problem
pub fn lex_suffix(text: &str) -> Result<Suffix, String> {
    let mut lex = SuffixToken::lexer(text);

    let signed = match lex.next() {
        Some(Ok(SuffixToken::Unsigned)) => false,
        Some(Ok(SuffixToken::Signed)) => true,
        _ => return Err("invalid number format".to_string()),
    };

    let width = match lex.next() {
        None => return Ok(Suffix { signed, width: None }),
        Some(Ok(SuffixToken::Width(width))) => width,
        _ => {
            return Err(format!(
                "'{}' should be followed by the number of bits in decimal",
                &text[..1]
            ))
        }
    };

    match lex.next() {
        None | Some(Ok(SuffixToken::Unit)) => {}
        _ => return Err(format!("unexpected characters after width {}", width)),
    }
    if lex.next().is_some() {
        return Err(format!("unexpected characters after width {}", width));
    }

    Ok(Suffix {
        signed,
        width: Some(width),
    })
}
