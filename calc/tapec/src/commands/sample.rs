//! The `sample` command: tabulate a program for plotting and report its range.

use std::io::Write;

use tape_ir::format_literal;

use super::{load_program, CommandError};

/// Print one `x  y` line per sample, then the range a plot would scale to.
pub fn sample_program(
    source: &str,
    from: f64,
    to: f64,
    points: usize,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let engine = load_program(source)?;
    let samples = engine.sample(from, to, points)?;

    for &(x, y) in &samples {
        writeln!(out, "{}  {}", format_literal(x), format_literal(y))?;
    }
    match samples.range() {
        Some((min, max)) => writeln!(
            out,
            "Range: {} .. {}",
            format_literal(min),
            format_literal(max)
        )?,
        None => writeln!(out, "Range: none (every sample is NaN)")?,
    }
    Ok(())
}
