//! The `eval` command: evaluate a program at one or more inputs.

use std::io::Write;

use tape_ir::format_literal;

use super::{load_program, CommandError};
use crate::config::DEFAULT_INPUT;

/// Evaluate `source` at each of `inputs`, or at [`DEFAULT_INPUT`] if there
/// are none. Stops at the first failing input.
pub fn eval_program(
    source: &str,
    inputs: &[f64],
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let engine = load_program(source)?;
    let default = [DEFAULT_INPUT];
    let inputs = if inputs.is_empty() { &default[..] } else { inputs };

    for &x in inputs {
        let result = engine.evaluate(x).map_err(|err| err.at_input(x))?;
        writeln!(
            out,
            "X {}  Result: {}",
            format_literal(x),
            format_literal(result)
        )?;
    }
    Ok(())
}
