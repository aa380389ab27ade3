//! The `show` command: list a program's tape slot by slot, a page at a time.

use std::io::Write;

use tape_ir::{LITERAL_WIDTH, PAGE_COUNT, PAGE_LEN};

use super::{load_program, CommandError};

/// List slots as `NNN symbol`, numbered from 1 like the calculator screen.
///
/// Without `page`, lists every page up to the last used slot (at least one).
pub fn show_program(
    source: &str,
    page: Option<usize>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let engine = load_program(source)?;
    let tape = engine.tape();
    let pages = match page {
        Some(page) if page >= PAGE_COUNT => return Err(CommandError::PageOutOfRange { page }),
        Some(page) => page..page + 1,
        None => 0..tape.used_len().div_ceil(PAGE_LEN).max(1),
    };

    let width = LITERAL_WIDTH;
    for page in pages {
        for (index, symbol) in tape.page(page) {
            let line = format!("{:03} {symbol:>width$}", index + 1);
            writeln!(out, "{}", line.trim_end())?;
        }
    }
    Ok(())
}
