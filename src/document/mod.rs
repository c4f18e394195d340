//! File persistence
//! Reads a whole file into a buffer and writes a buffer back to disk

use crate::buffer::TextBuffer;
use crate::constants::errors::{LOAD_FAILED, SAVE_FAILED};
use crate::error::{EditorError, ErrorType};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Load `path` into a new buffer. A missing or unreadable file is a
/// critical `LOAD_FAILED` error.
pub fn load(path: &Path) -> Result<TextBuffer, EditorError> {
    let bytes = fs::read(path).map_err(|e| {
        EditorError::critical(
            ErrorType::Io,
            LOAD_FAILED,
            format!("{}: {}", path.display(), e),
        )
    })?;
    let buf = TextBuffer::from_bytes(&bytes)?;
    info!(path = %path.display(), lines = buf.nlines(), "loaded");
    Ok(buf)
}

/// Write the whole buffer to `path`
pub fn save(path: &Path, buf: &TextBuffer) -> Result<(), EditorError> {
    write_atomic(path, &buf.to_bytes()).map_err(|e| {
        EditorError::new(
            ErrorType::Io,
            SAVE_FAILED,
            format!("{}: {}", path.display(), e),
        )
    })?;
    info!(path = %path.display(), bytes = buf.len(), "saved");
    Ok(())
}

/// Write through a temporary sibling file and rename it over `path`
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("file")
    ));

    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    fs::rename(&temp_path, path)
}
