//! The `integrate` command: trapezoidal area of a program over an interval.

use std::io::Write;

use tape_ir::format_literal;

use super::{load_program, CommandError};

/// Integrate `source` over `[from, to]` and print the parameters and area.
pub fn integrate_program(
    source: &str,
    from: f64,
    to: f64,
    segments: usize,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let engine = load_program(source)?;
    let area = engine.integrate(from, to, segments)?;

    writeln!(out, "Start  {}", format_literal(from))?;
    writeln!(out, "End    {}", format_literal(to))?;
    writeln!(out, "Chunk  {segments}")?;
    writeln!(out, "Result: {}", format_literal(area))?;
    Ok(())
}
