use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

pub fn read_document(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Atomically replace the file's contents (temp file + rename).
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;

    tmp.persist(path).map_err(std::io::Error::other)?;
    Ok(())
}
