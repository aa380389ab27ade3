//! Error types for tape evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the taxonomy callers match on. `EvalError` carries the
//! details, and wraps failures that happened inside a sweep (integration,
//! sampling) in `AtInput` without changing their kind.
//!
//! NaN and infinities are not errors: `sqrt(-1)` or `1 / 0` evaluate to
//! whatever IEEE-754 says and flow through as ordinary results.

use thiserror::Error;

/// Typed error category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    /// An operator was reached with too few operands on the stack.
    StackUnderflow,
    /// The scan finished with an empty stack.
    EmptyResult,
    /// A sweep was requested over an unusable interval.
    InvalidRange,
}

/// Evaluation failure.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error(
        "stack underflow at slot {slot}: `{op}` needs {needed} operand(s) but the stack holds {available}"
    )]
    StackUnderflow {
        slot: usize,
        op: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("tape produced no value")]
    EmptyResult,
    #[error("invalid range [{from}, {to}] with {steps} step(s)")]
    InvalidRange { from: f64, to: f64, steps: usize },
    /// A failure while sweeping, tagged with the input being evaluated.
    #[error("at x = {input}: {source}")]
    AtInput {
        input: f64,
        #[source]
        source: Box<EvalError>,
    },
}

impl EvalError {
    /// The category of this error, looking through `AtInput` wrappers.
    pub fn kind(&self) -> EvalErrorKind {
        match self {
            Self::StackUnderflow { .. } => EvalErrorKind::StackUnderflow,
            Self::EmptyResult => EvalErrorKind::EmptyResult,
            Self::InvalidRange { .. } => EvalErrorKind::InvalidRange,
            Self::AtInput { source, .. } => source.kind(),
        }
    }

    /// Tag this error with the input a sweep was evaluating.
    #[must_use]
    pub fn at_input(self, input: f64) -> Self {
        Self::AtInput {
            input,
            source: Box::new(self),
        }
    }

    /// The innermost error, with every `AtInput` wrapper removed.
    pub fn root(&self) -> &EvalError {
        match self {
            Self::AtInput { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cold]
pub(crate) fn stack_underflow(
    slot: usize,
    op: &'static str,
    needed: usize,
    available: usize,
) -> EvalError {
    EvalError::StackUnderflow {
        slot,
        op,
        needed,
        available,
    }
}

#[cold]
pub(crate) fn invalid_range(from: f64, to: f64, steps: usize) -> EvalError {
    EvalError::InvalidRange { from, to, steps }
}
