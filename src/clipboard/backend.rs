//! Backend dispatch
//!
//! `auto` is the full bridge: probe the environment, pick a mechanism, run
//! it. `system` and `osc52` skip the probe and force one mechanism.

use crate::config::{ClipboardBackend, Osc52Mode};
use crate::error::CliprelayError;
use crate::probe::Probe;
use crate::selector::{self, Action, Selection};

use super::{external, osc52, system, temp_file};

/// Copy bytes through the configured backend
pub fn copy(
    data: &[u8],
    backend: ClipboardBackend,
    selection: Selection,
    osc52_mode: Osc52Mode,
) -> Result<(), CliprelayError> {
    match backend {
        ClipboardBackend::Auto => auto_copy(data, selection, osc52_mode),
        ClipboardBackend::System => system::copy(data),
        ClipboardBackend::Osc52 => osc52::copy(data, selection, Probe::from_env().tmux),
    }
}

/// Paste through the configured backend, returning the raw clipboard bytes
pub fn paste(backend: ClipboardBackend, selection: Selection) -> Result<Vec<u8>, CliprelayError> {
    match backend {
        ClipboardBackend::Auto => {
            let probe = Probe::from_env();
            let action = selector::select_paste(&probe);

            #[cfg(debug_assertions)]
            log::debug!("Paste action: {:?}", action);

            run_paste_action(action, selection)
        }
        ClipboardBackend::System => system::paste(),
        ClipboardBackend::Osc52 => Err(CliprelayError::Osc52PasteUnsupported),
    }
}

fn auto_copy(
    data: &[u8],
    selection: Selection,
    osc52_mode: Osc52Mode,
) -> Result<(), CliprelayError> {
    let probe = Probe::from_env();
    let plan = selector::select_copy(&probe, osc52_mode);

    #[cfg(debug_assertions)]
    log::debug!("Copy plan: {:?}", plan);

    let primary = run_copy_action(plan.primary, selection, data);

    // The escape-sequence layer still goes out when the primary mechanism
    // failed; the terminal may reach a clipboard the host tools cannot.
    let layered = match plan.osc52 {
        Some(layer) => run_copy_action(layer, selection, data),
        None => Ok(()),
    };

    primary.and(layered)
}

fn run_copy_action(
    action: Action,
    selection: Selection,
    data: &[u8],
) -> Result<(), CliprelayError> {
    if let Some((tool, args)) = action.copy_command(selection) {
        return external::copy(tool, args, data);
    }

    match action {
        Action::TempFile => temp_file::store(data),
        Action::Osc52 => osc52::copy(data, selection, false),
        Action::Osc52Tmux => osc52::copy(data, selection, true),
        // the rest carry a copy command and were handled above
        Action::Wayland | Action::X11Xsel | Action::X11Xclip | Action::MacOs
        | Action::TmuxBuffer => Ok(()),
    }
}

fn run_paste_action(action: Action, selection: Selection) -> Result<Vec<u8>, CliprelayError> {
    if let Some((tool, args)) = action.paste_command(selection) {
        return external::paste(tool, args);
    }

    match action {
        Action::TempFile => temp_file::load(),
        // select_paste never yields these; forcing them is a caller error
        Action::Osc52 | Action::Osc52Tmux => Err(CliprelayError::Osc52PasteUnsupported),
        // the rest carry a paste command and were handled above
        Action::Wayland | Action::X11Xsel | Action::X11Xclip | Action::MacOs
        | Action::TmuxBuffer => Ok(Vec::new()),
    }
}
