//! Temp-file fallback
//!
//! Last resort when no clipboard mechanism is reachable: a per-user buffer
//! file under the system temp directory. Last copy wins; paste reads it
//! back. Nothing else about the file is managed.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::CliprelayError;

/// Per-user buffer path under the system temp directory
pub fn buffer_path() -> PathBuf {
    let user = env::var("USER").unwrap_or_else(|_| String::from("anon"));
    env::temp_dir().join(format!("cliprelay-{}.buf", user))
}

pub fn store(data: &[u8]) -> Result<(), CliprelayError> {
    store_at(&buffer_path(), data)
}

pub fn load() -> Result<Vec<u8>, CliprelayError> {
    load_from(&buffer_path())
}

fn store_at(path: &Path, data: &[u8]) -> Result<(), CliprelayError> {
    #[cfg(debug_assertions)]
    log::debug!("Storing {} bytes in {:?}", data.len(), path);

    fs::write(path, data)?;
    Ok(())
}

fn load_from(path: &Path) -> Result<Vec<u8>, CliprelayError> {
    match fs::read(path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(CliprelayError::EmptyBuffer),
        Err(e) => Err(e.into()),
    }
}
