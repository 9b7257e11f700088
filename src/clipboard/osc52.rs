//! OSC 52 clipboard backend
//!
//! Writes the clipboard through the terminal emulator itself, which is the
//! only mechanism that works over a bare SSH session. tmux intercepts escape
//! sequences, so inside tmux the sequence goes out wrapped in a DCS
//! passthrough.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fs::OpenOptions;
use std::io::{self, Write};

use crate::error::CliprelayError;
use crate::selector::Selection;

/// Emulators commonly cap OSC 52 payloads around this size and truncate
/// silently past it
#[cfg(debug_assertions)]
const PAYLOAD_WARN_BYTES: usize = 100_000;

/// Copy bytes to the clipboard via an OSC 52 escape sequence
///
/// With `inside_tmux` the sequence is wrapped so tmux forwards it to the
/// underlying terminal instead of swallowing it.
pub fn copy(data: &[u8], selection: Selection, inside_tmux: bool) -> Result<(), CliprelayError> {
    let mut sequence = encode_osc52(data, selection);
    if inside_tmux {
        sequence = wrap_tmux_passthrough(&sequence);
    }

    #[cfg(debug_assertions)]
    if sequence.len() > PAYLOAD_WARN_BYTES {
        log::debug!(
            "OSC 52 sequence is {} bytes, the terminal may truncate it",
            sequence.len()
        );
    }

    emit(sequence.as_bytes())
}

/// Write the sequence to the controlling terminal, falling back to stdout
///
/// In copy mode stdout may be redirected; the escape sequence has to reach
/// the terminal, not the pipe.
fn emit(sequence: &[u8]) -> Result<(), CliprelayError> {
    if let Ok(mut tty) = OpenOptions::new().write(true).open("/dev/tty") {
        tty.write_all(sequence)?;
        tty.flush()?;
        return Ok(());
    }

    let mut stdout = io::stdout();
    stdout.write_all(sequence)?;
    stdout.flush()?;
    Ok(())
}

/// Build the OSC 52 sequence for a payload
///
/// Format: `\x1b]52;<sel>;{base64}\x07` where `<sel>` is `c` for the
/// clipboard and `p` for the primary selection.
pub fn encode_osc52(data: &[u8], selection: Selection) -> String {
    let sel = match selection {
        Selection::Clipboard => 'c',
        Selection::Primary => 'p',
    };
    format!("\x1b]52;{};{}\x07", sel, STANDARD.encode(data))
}

/// Wrap a sequence in the tmux DCS passthrough
///
/// `\x1bPtmux;` + the sequence with every ESC doubled + `\x1b\\`. tmux strips
/// the wrapper and one level of ESC doubling, then forwards the rest to the
/// outer terminal.
pub fn wrap_tmux_passthrough(sequence: &str) -> String {
    format!("\x1bPtmux;{}\x1b\\", sequence.replace('\x1b', "\x1b\x1b"))
}
