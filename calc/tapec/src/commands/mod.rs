//! Command implementations for the `tapecalc` CLI.
//!
//! Each command loads a tape into an engine, drives it, and writes plain
//! text to the given writer. Numbers are printed in the calculator's
//! fixed-width `+d.dddddd E±dd` display form, except by `demo`.

mod demo;
mod eval;
mod integrate;
mod sample;
mod show;

pub use demo::{run_demo, DEMO_PROGRAM};
pub use eval::eval_program;
pub use integrate::integrate_program;
pub use sample::sample_program;
pub use show::show_program;

use tape_eval::{Engine, EvalError};
use tape_ir::{parse_program, ProgramError, PAGE_COUNT};
use thiserror::Error;

use crate::report::render_program_error;

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program text did not parse; `rendered` is the annotated report.
    #[error("{error}")]
    Program {
        #[source]
        error: ProgramError,
        rendered: String,
    },
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("page {page} out of range (0..{PAGE_COUNT})")]
    PageOutOfRange { page: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Text to show the user on stderr.
    pub fn report(&self) -> String {
        match self {
            Self::Program { rendered, .. } => rendered.clone(),
            other => format!("error: {other}\n"),
        }
    }
}

/// Parse program text into an engine, rendering parse errors.
pub(crate) fn load_program(source: &str) -> Result<Engine, CommandError> {
    match parse_program(source) {
        Ok(tape) => {
            tracing::debug!(used = tape.used_len(), %tape, "loaded program");
            Ok(Engine::with_tape(tape))
        }
        Err(error) => {
            tracing::debug!(%error, "program did not parse");
            Err(CommandError::Program {
                rendered: render_program_error(source, &error),
                error,
            })
        }
    }
}
