use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliprelayError {
    #[error("Failed to spawn {tool}: {source}")]
    Spawn {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("System clipboard error: {0}")]
    SystemClipboard(String),

    #[error("OSC 52 can write the clipboard but not read it back")]
    Osc52PasteUnsupported,

    #[error("Clipboard buffer is empty")]
    EmptyBuffer,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
