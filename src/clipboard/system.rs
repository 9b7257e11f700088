//! System clipboard backend
//!
//! Native clipboard access via the arboard crate, for hosts where talking to
//! the display server directly beats shelling out. Only reachable through
//! `backend = "system"`; the auto path sticks to the probed tools.

use arboard::Clipboard;

use crate::error::CliprelayError;

/// Copy bytes to the system clipboard
///
/// arboard is text-only, so the payload is interpreted as UTF-8 (lossily).
pub fn copy(data: &[u8]) -> Result<(), CliprelayError> {
    let text = String::from_utf8_lossy(data).into_owned();

    let mut clipboard =
        Clipboard::new().map_err(|e| CliprelayError::SystemClipboard(e.to_string()))?;

    clipboard
        .set_text(text)
        .map_err(|e| CliprelayError::SystemClipboard(e.to_string()))
}

/// Read the system clipboard
pub fn paste() -> Result<Vec<u8>, CliprelayError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| CliprelayError::SystemClipboard(e.to_string()))?;

    let text = clipboard
        .get_text()
        .map_err(|e| CliprelayError::SystemClipboard(e.to_string()))?;

    Ok(text.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_returns_result() {
        // The clipboard may legitimately be unavailable (headless CI, no
        // display server); only the error shape is asserted.
        let result = copy(b"test");
        assert!(result.is_ok() || matches!(result, Err(CliprelayError::SystemClipboard(_))));
    }

    #[test]
    fn test_paste_returns_result() {
        let result = paste();
        assert!(result.is_ok() || matches!(result, Err(CliprelayError::SystemClipboard(_))));
    }
}
