//! Rendering of program-text errors.

use ariadne::{Config, Label, Report, ReportKind, Source};
use tape_ir::ProgramError;

/// Name the program text is reported under.
const SOURCE_NAME: &str = "program";

/// Render `error` as an annotated snippet of `source`, without color.
pub fn render_program_error(source: &str, error: &ProgramError) -> String {
    let span = error.span();
    let mut bytes = Vec::new();
    let written = Report::build(ReportKind::Error, (SOURCE_NAME, span.clone()))
        .with_config(Config::default().with_color(false))
        .with_message(error.to_string())
        .with_label(Label::new((SOURCE_NAME, span)).with_message(error.label()))
        .finish()
        .write((SOURCE_NAME, Source::from(source)), &mut bytes);

    match written {
        Ok(()) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => format!("error: {error}\n"),
    }
}
