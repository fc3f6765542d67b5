//! Filesystem utilities.

use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists, creating it (and missing ancestors) if
/// necessary. Returns whether anything was created. An existing path of
/// any type skips creation without inspection.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    Ok(true)
}
