//! Tape symbols (opcodes).

use std::fmt;

use crate::literal::format_literal;
use crate::operators::{BinaryFn, UnaryFn};

/// Display name of the free variable.
pub const INPUT_NAME: &str = "X";

/// One tape slot.
///
/// `Copy` keeps snapshots and slot reads cheap; a symbol is at most one
/// `f64` plus a tag.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Symbol {
    /// No-op slot.
    #[default]
    Empty,
    /// Pushes a constant.
    Literal(f64),
    /// Pops one operand, pushes the function applied to it.
    Unary(UnaryFn),
    /// Pops two operands, pushes the function applied to them.
    Binary(BinaryFn),
    /// Pushes the value the tape is being evaluated at.
    Input,
}

impl Symbol {
    /// The literal `pi`, offered as a shortcut by the number menu.
    pub const PI: Symbol = Symbol::Literal(std::f64::consts::PI);

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of operands this symbol pops when evaluated.
    pub const fn arity(&self) -> usize {
        match self {
            Self::Empty | Self::Literal(_) | Self::Input => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Name shown for this symbol in listings and error messages.
    ///
    /// Literals are rendered in the fixed-width scientific format; an empty
    /// slot renders as an empty string.
    pub fn display_name(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Literal(value) => format_literal(*value),
            Self::Unary(op) => op.name().to_owned(),
            Self::Binary(op) => op.as_symbol().to_owned(),
            Self::Input => INPUT_NAME.to_owned(),
        }
    }
}

impl From<UnaryFn> for Symbol {
    fn from(op: UnaryFn) -> Self {
        Self::Unary(op)
    }
}

impl From<BinaryFn> for Symbol {
    fn from(op: BinaryFn) -> Self {
        Self::Binary(op)
    }
}

impl From<f64> for Symbol {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

/// Honors width and alignment flags, so `{:>13}` lines slots up the way the
/// tape listing does.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.display_name())
    }
}
