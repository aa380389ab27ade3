//! The fixed-length symbol tape.
//!
//! A tape is exactly [`TAPE_LEN`] slots for its whole life. Slots are only
//! ever replaced in place; nothing is inserted, removed, or reordered.

use std::fmt;

use thiserror::Error;

use crate::symbol::Symbol;

/// Number of slots on every tape.
pub const TAPE_LEN: usize = 100;

/// Slots shown per page of a tape listing.
pub const PAGE_LEN: usize = 10;

/// Pages in a tape listing.
pub const PAGE_COUNT: usize = TAPE_LEN / PAGE_LEN;

/// `from_symbols` stops counting an overlong sequence here.
pub const MAX_COUNTED_LEN: usize = 10 * TAPE_LEN;

/// Error building a tape from a symbol sequence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TapeError {
    /// `len` saturates at [`MAX_COUNTED_LEN`].
    #[error(
        "program has {}{len} symbols but a tape holds {TAPE_LEN}",
        at_least(*.len)
    )]
    TooLong { len: usize },
}

fn at_least(len: usize) -> &'static str {
    if len >= MAX_COUNTED_LEN {
        "at least "
    } else {
        ""
    }
}

/// An ordered sequence of [`TAPE_LEN`] symbols, `Empty` by default.
#[derive(Clone, PartialEq)]
pub struct Tape {
    slots: [Symbol; TAPE_LEN],
}

impl Tape {
    /// Create a tape with every slot `Empty`.
    pub fn new() -> Self {
        Tape {
            slots: [Symbol::Empty; TAPE_LEN],
        }
    }

    /// Build a tape whose leading slots hold `symbols`, in order.
    ///
    /// The remaining slots are `Empty`. Works on unbounded iterators: past
    /// the tape, at most [`MAX_COUNTED_LEN`] symbols are pulled.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self, TapeError> {
        let mut tape = Tape::new();
        let mut symbols = symbols.into_iter();
        for (slot, symbol) in tape.slots.iter_mut().zip(symbols.by_ref()) {
            *slot = symbol;
        }
        if symbols.next().is_none() {
            return Ok(tape);
        }
        let rest = symbols.take(MAX_COUNTED_LEN - TAPE_LEN - 1).count();
        Err(TapeError::TooLong {
            len: TAPE_LEN + 1 + rest,
        })
    }

    /// Read the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TAPE_LEN`.
    #[inline]
    pub fn get(&self, index: usize) -> Symbol {
        self.slots[index]
    }

    /// Replace the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TAPE_LEN`; callers address slots through the
    /// listing, so an out-of-range index is a bug on their side.
    #[inline]
    pub fn set(&mut self, index: usize, symbol: Symbol) {
        self.slots[index] = symbol;
    }

    /// Reset every slot to `Empty`.
    pub fn clear(&mut self) {
        self.slots = [Symbol::Empty; TAPE_LEN];
    }

    #[inline]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.slots.iter()
    }

    /// One past the last non-empty slot (0 for a blank tape).
    pub fn used_len(&self) -> usize {
        self.slots
            .iter()
            .rposition(|symbol| !symbol.is_empty())
            .map_or(0, |last| last + 1)
    }

    /// Slots on listing page `page`, paired with their tape index.
    ///
    /// # Panics
    ///
    /// Panics if `page >= PAGE_COUNT`.
    pub fn page(&self, page: usize) -> impl Iterator<Item = (usize, Symbol)> + '_ {
        assert!(page < PAGE_COUNT, "page {page} out of range (0..{PAGE_COUNT})");
        let start = page * PAGE_LEN;
        self.slots[start..start + PAGE_LEN]
            .iter()
            .enumerate()
            .map(move |(offset, symbol)| (start + offset, *symbol))
    }
}

impl Default for Tape {
    fn default() -> Self {
        Tape::new()
    }
}

impl<'a> IntoIterator for &'a Tape {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lists the used prefix only; a blank tape prints as `Tape []`.
impl fmt::Debug for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tape ")?;
        f.debug_list()
            .entries(&self.slots[..self.used_len()])
            .finish()
    }
}

/// Space-separated program text for the used prefix, empty slots as `_`.
impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, symbol) in self.slots[..self.used_len()].iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match symbol {
                Symbol::Empty => f.write_str("_")?,
                Symbol::Literal(value) => write!(f, "{value}")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}
