//! The engine a calculator front end talks to.
//!
//! Owns one tape for the life of the session. The front end pushes edits in
//! as `(index, symbol)` pairs and asks for evaluations; it never holds a
//! reference into the tape.

use tape_ir::{Symbol, Tape};

use crate::errors::EvalError;
use crate::evaluator::Evaluator;
use crate::sample::Samples;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Engine {
    tape: Tape,
}

impl Engine {
    /// An engine with a blank tape.
    pub fn new() -> Self {
        Engine::default()
    }

    pub fn with_tape(tape: Tape) -> Self {
        Engine { tape }
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Replace the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TAPE_LEN`.
    pub fn set_symbol(&mut self, index: usize, symbol: Symbol) {
        tracing::debug!(index, %symbol, "set symbol");
        self.tape.set(index, symbol);
    }

    /// Read the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TAPE_LEN`.
    pub fn symbol(&self, index: usize) -> Symbol {
        self.tape.get(index)
    }

    /// Blank every slot.
    pub fn clear(&mut self) {
        tracing::debug!("clear tape");
        self.tape.clear();
    }

    pub fn evaluate(&self, input: f64) -> Result<f64, EvalError> {
        Evaluator::new(&self.tape).evaluate(input)
    }

    pub fn integrate(&self, from: f64, to: f64, segments: usize) -> Result<f64, EvalError> {
        Evaluator::new(&self.tape).integrate(from, to, segments)
    }

    pub fn sample(&self, from: f64, to: f64, points: usize) -> Result<Samples, EvalError> {
        Evaluator::new(&self.tape).sample(from, to, points)
    }
}

impl From<Tape> for Engine {
    fn from(tape: Tape) -> Self {
        Engine::with_tape(tape)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
