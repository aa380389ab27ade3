//! `tapecalc`: evaluate, integrate, and sample postfix programs.

use std::io::Write;

use clap::Parser;
use tapec::{
    eval_program, init_tracing, integrate_program, run_demo, sample_program, show_program, Cli,
    Command, CommandError,
};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = run(cli.command, &mut out).and_then(|()| out.flush().map_err(CommandError::from));

    if let Err(err) = result {
        eprint!("{}", err.report());
        std::process::exit(1);
    }
}

fn run(command: Command, out: &mut impl Write) -> Result<(), CommandError> {
    match command {
        Command::Eval { program, inputs } => eval_program(&program, &inputs, out),
        Command::Integrate {
            program,
            from,
            to,
            segments,
        } => integrate_program(&program, from, to, segments, out),
        Command::Sample {
            program,
            from,
            to,
            points,
        } => sample_program(&program, from, to, points, out),
        Command::Show { program, page } => show_program(&program, page, out),
        Command::Demo => run_demo(out),
    }
}
