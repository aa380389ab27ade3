//! Command-line configuration.
//!
//! Flags only; logging is configured through `RUST_LOG`.

use clap::{Parser, Subcommand};

/// Trapezoids used by `integrate` when `--segments` is not given.
pub const DEFAULT_SEGMENTS: usize = 10_000;

/// Points used by `sample`, one per plot column.
pub const DEFAULT_POINTS: usize = 40;

/// Input used by `eval` when no `--x` is given.
pub const DEFAULT_INPUT: f64 = 0.0;

#[derive(Debug, Parser)]
#[command(
    name = "tapecalc",
    version,
    about = "Postfix calculator: evaluate, integrate, and sample a tape",
    after_help = "Programs are whitespace-separated words, e.g. \"pi x 4 ^ sqrt +\".\n\
                  Words: numbers, pi, x, _, + - * / ^, sqrt exp exp2 log/ln log10 log2 \
                  sin cos tan sinh cosh tanh."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a program at one or more inputs
    Eval {
        #[arg(allow_hyphen_values = true)]
        program: String,
        /// Value bound to `x` (repeatable)
        #[arg(short = 'x', long = "x", allow_negative_numbers = true)]
        inputs: Vec<f64>,
    },
    /// Integrate a program over [from, to] with the trapezoidal rule
    Integrate {
        #[arg(allow_hyphen_values = true)]
        program: String,
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
        segments: usize,
    },
    /// Sample a program at evenly spaced inputs across [from, to)
    Sample {
        #[arg(allow_hyphen_values = true)]
        program: String,
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = DEFAULT_POINTS)]
        points: usize,
    },
    /// List the tape slot by slot
    Show {
        #[arg(allow_hyphen_values = true)]
        program: String,
        /// Only list this page (0-based, ten slots each)
        #[arg(long)]
        page: Option<usize>,
    },
    /// Run the built-in `pi x 4 ^ sqrt +` walkthrough
    Demo,
}
