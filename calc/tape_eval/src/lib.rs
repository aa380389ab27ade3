//! Tape Eval - the stack-machine engine behind tapecalc.
//!
//! Runs a [`Tape`](tape_ir::Tape) as a postfix program over one free
//! variable.
//!
//! # Architecture
//!
//! - [`Evaluator`]: one front-to-back scan against an operand stack
//! - [`Evaluator::integrate`]: composite trapezoidal rule over the evaluator
//! - [`Evaluator::sample`]: evenly spaced values and their NaN-aware range
//! - [`Engine`]: owns a tape; the surface a calculator front end talks to
//! - [`SharedTape`]: lock-guarded tape whose passes run on snapshots
//! - `evaluate_unary` / `evaluate_binary`: direct enum dispatch per operator
//!
//! # Errors
//!
//! Every failure is an [`EvalError`]; match on [`EvalError::kind`]. NaN and
//! infinities are ordinary results.

mod engine;
pub mod errors;
mod evaluator;
mod integrate;
mod operators;
mod sample;
mod shared;

pub use engine::Engine;
pub use errors::{EvalError, EvalErrorKind};
pub use evaluator::{evaluate, Evaluator};
pub use integrate::integrate;
pub use operators::{evaluate_binary, evaluate_unary};
pub use sample::{sample, Samples};
pub use shared::SharedTape;
