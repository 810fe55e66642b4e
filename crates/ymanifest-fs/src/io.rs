//! Read-only file access

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    tracing::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
