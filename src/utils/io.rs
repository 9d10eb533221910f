//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

fn ensure_parent(path: &Path, operation: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::internal_io(
                e.to_string(),
                Some(format!("{} (create {})", operation, parent.display())),
            )
        })?;
    }
    Ok(())
}

/// Write content to file, creating missing parent directories.
///
/// Replaces any existing file.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    ensure_parent(path, operation)?;
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a new file with `content`, creating missing parent directories.
///
/// Fails with `scaffold.file_exists` if the file is already there.
pub fn write_new_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    ensure_parent(path, operation)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::scaffold_file_exists(path.display().to_string()),
            _ => Error::internal_io(e.to_string(), Some(operation.to_string())),
        })?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}
