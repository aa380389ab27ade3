//! Tape shared between an editor and background readers.
//!
//! A pass reads up to every slot in order, so it must never observe an edit
//! halfway through. Every pass on a `SharedTape` therefore runs on a
//! snapshot taken under the read lock; edits take the write lock and only
//! affect passes started after them.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tape_ir::{Symbol, Tape};

use crate::errors::EvalError;
use crate::evaluator::Evaluator;
use crate::sample::Samples;

/// Thread-safe tape handle. Clones share the same tape.
#[derive(Clone, Default)]
pub struct SharedTape(Arc<RwLock<Tape>>);

impl SharedTape {
    pub fn new(tape: Tape) -> Self {
        SharedTape(Arc::new(RwLock::new(tape)))
    }

    /// Replace the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TAPE_LEN`.
    pub fn set_symbol(&self, index: usize, symbol: Symbol) {
        tracing::debug!(index, %symbol, "set shared symbol");
        self.0.write().set(index, symbol);
    }

    pub fn symbol(&self, index: usize) -> Symbol {
        self.0.read().get(index)
    }

    /// A copy of the tape as it is right now.
    pub fn snapshot(&self) -> Tape {
        self.0.read().clone()
    }

    pub fn evaluate(&self, input: f64) -> Result<f64, EvalError> {
        let tape = self.snapshot();
        Evaluator::new(&tape).evaluate(input)
    }

    pub fn integrate(&self, from: f64, to: f64, segments: usize) -> Result<f64, EvalError> {
        let tape = self.snapshot();
        Evaluator::new(&tape).integrate(from, to, segments)
    }

    pub fn sample(&self, from: f64, to: f64, points: usize) -> Result<Samples, EvalError> {
        let tape = self.snapshot();
        Evaluator::new(&tape).sample(from, to, points)
    }
}

impl From<Tape> for SharedTape {
    fn from(tape: Tape) -> Self {
        SharedTape::new(tape)
    }
}

impl fmt::Debug for SharedTape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedTape({:?})", &*self.0.read())
    }
}
