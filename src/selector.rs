//! Action selection
//!
//! Pure mapping from a [`Probe`] to the clipboard mechanism to use. All
//! policy lives here and none of the I/O does, so every branch is reachable
//! from a plain table test.
//!
//! Copy priority: native macOS tools, then Wayland, then X11 (xsel before
//! xclip), then a tmux buffer, then the temp-file fallback. On top of the
//! primary mechanism a copy may layer an OSC 52 escape sequence so the
//! terminal emulator itself can reach the clipboard of the machine the user
//! is actually sitting at.

use crate::config::Osc52Mode;
use crate::probe::{Os, Probe};

/// Which clipboard selection to target
///
/// Only xsel/xclip/wl-copy and OSC 52 distinguish selections; the other
/// mechanisms ignore this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Clipboard,
    Primary,
}

/// One concrete clipboard mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Wayland,
    X11Xsel,
    X11Xclip,
    MacOs,
    TmuxBuffer,
    TempFile,
    Osc52,
    Osc52Tmux,
}

/// Everything a copy has to do: one primary mechanism plus an optional
/// layered OSC 52 emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyPlan {
    pub primary: Action,
    pub osc52: Option<Action>,
}

/// Pick the copy plan for a probed environment
///
/// Selection is total: every probe maps to exactly one primary action, with
/// the temp file as the universal fallback.
pub fn select_copy(probe: &Probe, osc52_mode: Osc52Mode) -> CopyPlan {
    let primary = if probe.os == Os::MacOs && probe.tools.pbcopy {
        Action::MacOs
    } else if probe.wayland_display && probe.tools.wl_copy {
        Action::Wayland
    } else if probe.x11_display && probe.tools.xsel {
        Action::X11Xsel
    } else if probe.x11_display && probe.tools.xclip {
        Action::X11Xclip
    } else if probe.tmux && probe.tools.tmux {
        Action::TmuxBuffer
    } else {
        Action::TempFile
    };

    let osc52 = match osc52_mode {
        Osc52Mode::Never => None,
        Osc52Mode::Always => Some(osc52_action(probe)),
        Osc52Mode::Auto if probe.remote_session => Some(osc52_action(probe)),
        Osc52Mode::Auto => None,
    };

    CopyPlan { primary, osc52 }
}

/// Pick the paste action for a probed environment
///
/// OSC 52 never applies here: a terminal cannot be asked for its clipboard
/// portably, so the chain bottoms out at the temp file.
pub fn select_paste(probe: &Probe) -> Action {
    if probe.os == Os::MacOs && probe.tools.pbpaste {
        Action::MacOs
    } else if probe.wayland_display && probe.tools.wl_paste {
        Action::Wayland
    } else if probe.x11_display && probe.tools.xsel {
        Action::X11Xsel
    } else if probe.x11_display && probe.tools.xclip {
        Action::X11Xclip
    } else if probe.tmux && probe.tools.tmux {
        Action::TmuxBuffer
    } else {
        Action::TempFile
    }
}

fn osc52_action(probe: &Probe) -> Action {
    // tmux intercepts escape sequences, so the inner OSC 52 needs the
    // passthrough wrapper to reach the outer terminal
    if probe.tmux {
        Action::Osc52Tmux
    } else {
        Action::Osc52
    }
}

impl Action {
    /// External command template for a copy, if this mechanism is one
    pub fn copy_command(self, selection: Selection) -> Option<(&'static str, &'static [&'static str])> {
        match (self, selection) {
            (Action::Wayland, Selection::Clipboard) => Some(("wl-copy", &[])),
            (Action::Wayland, Selection::Primary) => Some(("wl-copy", &["--primary"])),
            (Action::X11Xsel, Selection::Clipboard) => Some(("xsel", &["--input", "--clipboard"])),
            (Action::X11Xsel, Selection::Primary) => Some(("xsel", &["--input", "--primary"])),
            (Action::X11Xclip, Selection::Clipboard) => Some(("xclip", &["-selection", "clipboard"])),
            (Action::X11Xclip, Selection::Primary) => Some(("xclip", &["-selection", "primary"])),
            (Action::MacOs, _) => Some(("pbcopy", &[])),
            (Action::TmuxBuffer, _) => Some(("tmux", &["load-buffer", "-"])),
            (Action::TempFile | Action::Osc52 | Action::Osc52Tmux, _) => None,
        }
    }

    /// External command template for a paste, if this mechanism has one
    pub fn paste_command(self, selection: Selection) -> Option<(&'static str, &'static [&'static str])> {
        match (self, selection) {
            (Action::Wayland, Selection::Clipboard) => Some(("wl-paste", &["--no-newline"])),
            (Action::Wayland, Selection::Primary) => Some(("wl-paste", &["--no-newline", "--primary"])),
            (Action::X11Xsel, Selection::Clipboard) => Some(("xsel", &["--output", "--clipboard"])),
            (Action::X11Xsel, Selection::Primary) => Some(("xsel", &["--output", "--primary"])),
            (Action::X11Xclip, Selection::Clipboard) => {
                Some(("xclip", &["-selection", "clipboard", "-o"]))
            }
            (Action::X11Xclip, Selection::Primary) => {
                Some(("xclip", &["-selection", "primary", "-o"]))
            }
            (Action::MacOs, _) => Some(("pbpaste", &[])),
            (Action::TmuxBuffer, _) => Some(("tmux", &["save-buffer", "-"])),
            (Action::TempFile | Action::Osc52 | Action::Osc52Tmux, _) => None,
        }
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
