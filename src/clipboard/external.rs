//! External clipboard tools
//!
//! A copy pipes the payload into the tool's stdin; a paste captures the
//! tool's stdout. The payload stays raw bytes end to end.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::CliprelayError;

/// Pipe `data` into an external clipboard tool
pub fn copy(tool: &'static str, args: &[&str], data: &[u8]) -> Result<(), CliprelayError> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| CliprelayError::Spawn { tool, source })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(data)?;
    }

    let output = child.wait_with_output()?;

    if output.status.success() {
        Ok(())
    } else {
        Err(tool_failed(tool, output.status, &output.stderr))
    }
}

/// Capture the stdout of an external clipboard tool
pub fn paste(tool: &'static str, args: &[&str]) -> Result<Vec<u8>, CliprelayError> {
    let output = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| CliprelayError::Spawn { tool, source })?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(tool_failed(tool, output.status, &output.stderr))
    }
}

fn tool_failed(
    tool: &'static str,
    status: std::process::ExitStatus,
    stderr: &[u8],
) -> CliprelayError {
    CliprelayError::ToolFailed {
        tool,
        status,
        stderr: String::from_utf8_lossy(stderr).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_into_sink_succeeds() {
        // cat drains stdin and exits zero
        let result = copy("cat", &[], b"clipboard payload");
        assert!(result.is_ok());
    }

    #[test]
    fn test_copy_missing_tool_is_spawn_error() {
        let result = copy("cliprelay-no-such-tool", &[], b"x");
        assert!(matches!(result, Err(CliprelayError::Spawn { .. })));
    }

    #[test]
    fn test_copy_reports_nonzero_exit() {
        // Empty payload so the write side never hits a closed pipe
        let result = copy("false", &[], b"");
        match result {
            Err(CliprelayError::ToolFailed { tool, .. }) => assert_eq!(tool, "false"),
            other => panic!("Expected ToolFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_paste_captures_stdout() {
        let result = paste("echo", &["-n", "pasted"]);
        assert_eq!(result.unwrap(), b"pasted");
    }

    #[test]
    fn test_paste_missing_tool_is_spawn_error() {
        let result = paste("cliprelay-no-such-tool", &[]);
        assert!(matches!(result, Err(CliprelayError::Spawn { .. })));
    }

    #[test]
    fn test_paste_reports_nonzero_exit_with_stderr() {
        let result = paste("sh", &["-c", "echo broken >&2; exit 2"]);
        match result {
            Err(CliprelayError::ToolFailed { stderr, .. }) => {
                assert_eq!(stderr, "broken");
            }
            other => panic!("Expected ToolFailed, got {:?}", other),
        }
    }
}
