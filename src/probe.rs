//! Environment probe
//!
//! Answers one question: which clipboard mechanisms can this host actually
//! reach? Reads a handful of environment variables and checks the search
//! path for the usual clipboard binaries. Selection policy lives in
//! [`crate::selector`]; this module only observes.

use std::env;

/// Operating system, as far as clipboard selection cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Other,
}

impl Os {
    /// The OS this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Os::MacOs
        } else if cfg!(target_os = "linux") {
            Os::Linux
        } else {
            Os::Other
        }
    }
}

/// Which clipboard binaries are present on PATH
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolSet {
    pub wl_copy: bool,
    pub wl_paste: bool,
    pub xsel: bool,
    pub xclip: bool,
    pub pbcopy: bool,
    pub pbpaste: bool,
    pub tmux: bool,
}

impl ToolSet {
    fn from_path() -> Self {
        ToolSet {
            wl_copy: tool_on_path("wl-copy"),
            wl_paste: tool_on_path("wl-paste"),
            xsel: tool_on_path("xsel"),
            xclip: tool_on_path("xclip"),
            pbcopy: tool_on_path("pbcopy"),
            pbpaste: tool_on_path("pbpaste"),
            tmux: tool_on_path("tmux"),
        }
    }
}

fn tool_on_path(binary: &str) -> bool {
    which::which(binary).is_ok()
}

/// Snapshot of everything action selection depends on
///
/// `Probe::from_env` reads the live process environment; tests construct
/// probes directly instead of mutating the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub os: Os,
    pub wayland_display: bool,
    pub x11_display: bool,
    pub tmux: bool,
    pub remote_session: bool,
    pub tools: ToolSet,
}

impl Probe {
    /// Probe the live process environment
    pub fn from_env() -> Self {
        let probe = Probe {
            os: Os::current(),
            wayland_display: env_set("WAYLAND_DISPLAY"),
            x11_display: env_set("DISPLAY"),
            tmux: env_set("TMUX"),
            remote_session: env_set("SSH_TTY") || env_set("SSH_CONNECTION"),
            tools: ToolSet::from_path(),
        };

        #[cfg(debug_assertions)]
        log::debug!("Environment probe: {:?}", probe);

        probe
    }
}

/// A variable set to the empty string counts as unset
fn env_set(name: &str) -> bool {
    env::var(name).map(|value| !value.is_empty()).unwrap_or(false)
}
