//! Operator implementations for the evaluator.
//!
//! Direct enum-based dispatch. The operator sets are fixed, so an exhaustive
//! match replaces the function-pointer tables a C calculator would index.
//! All arithmetic is plain IEEE-754: domain errors produce NaN, division by
//! zero produces an infinity or NaN, and neither is reported as an error.

use tape_ir::{BinaryFn, UnaryFn};

/// Apply a unary function.
#[inline]
pub fn evaluate_unary(value: f64, op: UnaryFn) -> f64 {
    match op {
        UnaryFn::Sqrt => value.sqrt(),
        UnaryFn::Exp => value.exp(),
        UnaryFn::Exp2 => value.exp2(),
        UnaryFn::Ln => value.ln(),
        UnaryFn::Log10 => value.log10(),
        UnaryFn::Log2 => value.log2(),
        UnaryFn::Sin => value.sin(),
        UnaryFn::Cos => value.cos(),
        UnaryFn::Tan => value.tan(),
        UnaryFn::Sinh => value.sinh(),
        UnaryFn::Cosh => value.cosh(),
        UnaryFn::Tanh => value.tanh(),
    }
}

/// Apply a binary function. `left` is the operand pushed first.
#[inline]
pub fn evaluate_binary(left: f64, right: f64, op: BinaryFn) -> f64 {
    match op {
        BinaryFn::Add => left + right,
        BinaryFn::Sub => left - right,
        BinaryFn::Mul => left * right,
        BinaryFn::Div => left / right,
        BinaryFn::Pow => left.powf(right),
    }
}

#[cfg(test)]
mod tests;
