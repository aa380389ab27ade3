//! Postfix evaluator.
//!
//! One pass over the tape, front to back, against one operand stack:
//!
//! | Symbol | Effect |
//! |--------|--------|
//! | `Literal(v)` | push `v` |
//! | `Input` | push the input |
//! | `Unary(f)` | pop `a`, push `f(a)` |
//! | `Binary(f)` | pop `b`, pop `a`, push `f(a, b)` |
//! | `Empty` | nothing |
//!
//! The result is the top of the stack once the scan ends. Values left
//! beneath it are discarded; the tape need not be a single balanced
//! expression.

use smallvec::SmallVec;
use tape_ir::{Symbol, Tape, TAPE_LEN};

use crate::errors::{stack_underflow, EvalError};
use crate::operators::{evaluate_binary, evaluate_unary};

/// Operand stack. Each slot pushes at most one value, so it never spills.
type Stack = SmallVec<[f64; TAPE_LEN]>;

/// Runs a borrowed tape.
///
/// The stack buffer is reused across calls and cleared at the start of
/// each evaluation, so no value survives from one call to the next.
pub struct Evaluator<'t> {
    tape: &'t Tape,
    stack: Stack,
}

impl<'t> Evaluator<'t> {
    pub fn new(tape: &'t Tape) -> Self {
        Evaluator {
            tape,
            stack: Stack::new(),
        }
    }

    /// The tape being evaluated.
    pub fn tape(&self) -> &'t Tape {
        self.tape
    }

    /// Evaluate the tape with the free variable bound to `input`.
    #[tracing::instrument(level = "trace", skip(self), ret)]
    pub fn evaluate(&mut self, input: f64) -> Result<f64, EvalError> {
        self.stack.clear();
        for (slot, symbol) in self.tape.iter().enumerate() {
            match *symbol {
                Symbol::Empty => {}
                Symbol::Literal(value) => self.stack.push(value),
                Symbol::Input => self.stack.push(input),
                Symbol::Unary(op) => {
                    let Some(top) = self.stack.last_mut() else {
                        return Err(stack_underflow(slot, op.name(), 1, 0));
                    };
                    *top = evaluate_unary(*top, op);
                }
                Symbol::Binary(op) => {
                    let available = self.stack.len();
                    let (Some(right), Some(left)) = (self.stack.pop(), self.stack.last_mut())
                    else {
                        return Err(stack_underflow(slot, op.as_symbol(), 2, available));
                    };
                    *left = evaluate_binary(*left, right, op);
                }
            }
        }
        self.stack.last().copied().ok_or(EvalError::EmptyResult)
    }

    /// Evaluate at `input`, tagging any failure with that input.
    pub(crate) fn evaluate_at(&mut self, input: f64) -> Result<f64, EvalError> {
        self.evaluate(input).map_err(|err| err.at_input(input))
    }
}

/// Evaluate `tape` once at `input`.
pub fn evaluate(tape: &Tape, input: f64) -> Result<f64, EvalError> {
    Evaluator::new(tape).evaluate(input)
}
