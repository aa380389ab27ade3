//! Command-line front end for the tape calculator.
//!
//! The binary is a thin shell over [`commands`]; everything here writes to a
//! caller-supplied writer so the commands can be driven from tests.

pub mod commands;
pub mod config;
mod report;
mod tracing_setup;

pub use commands::{
    eval_program, integrate_program, run_demo, sample_program, show_program, CommandError,
    DEMO_PROGRAM,
};
pub use config::{Cli, Command};
pub use report::render_program_error;
pub use tracing_setup::init_tracing;
