//! Program text: a tape written as whitespace-separated words.
//!
//! ```text
//! pi x 4 ^ sqrt +      # pi + sqrt(x^4)
//! ```
//!
//! Each word fills one slot, left to right:
//!
//! | Word | Symbol |
//! |------|--------|
//! | `_` | `Empty` |
//! | `x`, `X` | `Input` |
//! | `pi` | `Literal(PI)` |
//! | `sqrt` ... `tanh`, `ln` | `Unary` |
//! | `+ - * / ^`, `add sub mul div pow` | `Binary` |
//! | anything `f64` parses | `Literal` |

use std::ops::Range;

use thiserror::Error;

use crate::literal::parse_literal;
use crate::operators::{BinaryFn, UnaryFn};
use crate::symbol::{Symbol, INPUT_NAME};
use crate::tape::{Tape, TapeError, TAPE_LEN};

/// Error parsing program text. Spans are byte ranges into the source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("unknown word `{word}`")]
    UnknownWord { word: String, span: Range<usize> },
    #[error("program has {len} words but a tape holds {TAPE_LEN}")]
    TooLong { len: usize, span: Range<usize> },
}

impl ProgramError {
    /// Source range the error points at.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::UnknownWord { span, .. } | Self::TooLong { span, .. } => span.clone(),
        }
    }

    /// Short label for the offending range.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnknownWord { .. } => "not a number, operator, or `x`",
            Self::TooLong { .. } => "these words do not fit on the tape",
        }
    }
}

/// Interpret a single word as a symbol.
pub fn parse_word(word: &str) -> Option<Symbol> {
    if word == "_" {
        return Some(Symbol::Empty);
    }
    if word.eq_ignore_ascii_case(INPUT_NAME) {
        return Some(Symbol::Input);
    }
    if word.eq_ignore_ascii_case("pi") {
        return Some(Symbol::PI);
    }
    if let Some(op) = UnaryFn::from_name(word) {
        return Some(Symbol::Unary(op));
    }
    if let Some(op) = BinaryFn::from_name(word) {
        return Some(Symbol::Binary(op));
    }
    parse_literal(word).ok().map(Symbol::Literal)
}

/// Split `source` into words with their byte ranges.
fn words(source: &str) -> impl Iterator<Item = (&str, Range<usize>)> + '_ {
    let mut offset = 0;
    std::iter::from_fn(move || {
        let start = offset + source[offset..].find(|c: char| !c.is_ascii_whitespace())?;
        let len = source[start..]
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(source.len() - start);
        offset = start + len;
        Some((&source[start..offset], start..offset))
    })
}

/// Parse program text into its symbols, without the tape length check.
pub fn parse_symbols(source: &str) -> Result<Vec<Symbol>, ProgramError> {
    words(source)
        .map(|(word, span)| {
            parse_word(word).ok_or_else(|| ProgramError::UnknownWord {
                word: word.to_owned(),
                span,
            })
        })
        .collect()
}

/// Parse program text into a tape.
pub fn parse_program(source: &str) -> Result<Tape, ProgramError> {
    let symbols = parse_symbols(source)?;
    let len = symbols.len();
    Tape::from_symbols(symbols).map_err(|_: TapeError| {
        let overflow_start = words(source)
            .nth(TAPE_LEN)
            .map_or(0, |(_, span)| span.start);
        ProgramError::TooLong {
            len,
            span: overflow_start..source.trim_end().len(),
        }
    })
}
