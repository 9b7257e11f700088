//! Clipboard mechanisms
//!
//! One submodule per mechanism:
//! - External tools (wl-copy, xsel, xclip, pbcopy/pbpaste, tmux buffers)
//! - OSC 52 escape sequences (for remote terminals)
//! - System clipboard (via arboard, behind `backend = "system"`)
//! - Temp-file buffer (when nothing else is reachable)
//!
//! [`backend`] dispatches between them; the auto path goes through
//! [`crate::probe`] and [`crate::selector`].

mod backend;
mod external;
pub mod osc52;
mod system;
pub mod temp_file;

pub use backend::{copy, paste};
