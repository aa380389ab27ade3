//! The `demo` command: the built-in `pi x 4 ^ sqrt +` walkthrough.
//!
//! Prints numbers in C's `%.6E` form rather than the signed display form.

use std::io::Write;

use tape_eval::Engine;
use tape_ir::{format_scientific, BinaryFn, Symbol, UnaryFn};

use super::CommandError;
use crate::config::DEFAULT_SEGMENTS;

/// Program text of the tape [`run_demo`] builds.
pub const DEMO_PROGRAM: &str = "pi x 4 ^ sqrt +";

/// Build `pi + sqrt(x^4)` slot by slot, tabulate it over `-100..100`, and
/// integrate it over `[0, 1]`.
pub fn run_demo(out: &mut impl Write) -> Result<(), CommandError> {
    let mut engine = Engine::new();
    engine.set_symbol(0, Symbol::PI);
    engine.set_symbol(1, Symbol::Input);
    engine.set_symbol(2, Symbol::Literal(4.0));
    engine.set_symbol(3, Symbol::Binary(BinaryFn::Pow));
    engine.set_symbol(4, Symbol::Unary(UnaryFn::Sqrt));
    engine.set_symbol(5, Symbol::Binary(BinaryFn::Add));

    for i in -100..100_i32 {
        let out_value = engine.evaluate(f64::from(i))?;
        writeln!(out, "in: {i}, out: {}", format_scientific(out_value))?;
    }

    let area = engine.integrate(0.0, 1.0, DEFAULT_SEGMENTS)?;
    writeln!(out, "from: 0, to: 1, out: {}", format_scientific(area))?;
    Ok(())
}
