//! Mode resolution and the stdin/stdout plumbing
//!
//! With no explicit subcommand the direction follows stdin: a terminal on
//! stdin means the user wants the clipboard printed, a pipe means there is
//! something to copy.

use std::io::{self, IsTerminal, Read, Write};

use crate::clipboard;
use crate::config::{ClipboardBackend, Osc52Mode};
use crate::error::CliprelayError;
use crate::selector::Selection;

/// Direction of a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Copy,
    Paste,
}

/// Infer the direction from whether stdin is attached to a terminal
pub fn infer_mode() -> Mode {
    if io::stdin().is_terminal() {
        Mode::Paste
    } else {
        Mode::Copy
    }
}

/// Run one invocation end to end
pub fn run(
    mode: Mode,
    backend: ClipboardBackend,
    selection: Selection,
    osc52_mode: Osc52Mode,
) -> Result<(), CliprelayError> {
    #[cfg(debug_assertions)]
    log::debug!("Dispatch: {:?} via {:?}", mode, backend);

    match mode {
        Mode::Copy => run_copy(backend, selection, osc52_mode),
        Mode::Paste => run_paste(backend, selection),
    }
}

fn run_copy(
    backend: ClipboardBackend,
    selection: Selection,
    osc52_mode: Osc52Mode,
) -> Result<(), CliprelayError> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data)?;

    clipboard::copy(&data, backend, selection, osc52_mode)
}

fn run_paste(backend: ClipboardBackend, selection: Selection) -> Result<(), CliprelayError> {
    let data = clipboard::paste(backend, selection)?;

    // Raw bytes, unmodified; trailing-newline policy belongs to the tools
    let mut stdout = io::stdout();
    stdout.write_all(&data)?;
    stdout.flush()?;
    Ok(())
}
