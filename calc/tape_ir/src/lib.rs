//! Tape IR - symbol and tape types for the tapecalc engine.
//!
//! A calculator program is a [`Tape`]: [`TAPE_LEN`] slots, each holding one
//! [`Symbol`]. Read front to back, the tape is a postfix (reverse-Polish)
//! program over a single free variable; `tape_eval` runs it.
//!
//! This crate also owns the two text forms of a tape:
//! - [`program`]: whitespace-separated words (`"pi x 4 ^ sqrt +"`)
//! - [`literal`]: the fixed-width `+d.dddddd E±dd` display of numbers

pub mod literal;
mod operators;
pub mod program;
mod symbol;
mod tape;

pub use literal::{
    format_literal, format_scientific, parse_literal, LiteralError, LITERAL_TEMPLATE, LITERAL_WIDTH,
};
pub use operators::{BinaryFn, UnaryFn};
pub use program::{parse_program, parse_symbols, parse_word, ProgramError};
pub use symbol::{Symbol, INPUT_NAME};
pub use tape::{Tape, TapeError, MAX_COUNTED_LEN, PAGE_COUNT, PAGE_LEN, TAPE_LEN};
