pub mod destinations;

pub use destinations::{FileDestination, MemoryDestination, OutputDestination, StdoutDestination};

use crate::errors::ToolError;
use std::fs;
use std::path::Path;

/// Read an input file as UTF-8 text.
pub fn read_input(path: &Path) -> Result<String, ToolError> {
    fs::read_to_string(path).map_err(|e| ToolError::read(path, e))
}

/// Create `path` and its parents if it does not exist yet.
pub fn ensure_dir(path: &Path) -> Result<(), ToolError> {
    if !path.exists() {
        log::debug!("creating output directory {}", path.display());
        fs::create_dir_all(path)
            .map_err(|e| ToolError::write(format!("dir:{}", path.display()), e.to_string()))?;
    }
    Ok(())
}
