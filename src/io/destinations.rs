//! Output destinations for rendered reports.
//!
//! Each tool sends the same report text to stdout and to its results file.
//! The [`OutputDestination`] trait hides the difference so the report layer
//! can emit to any number of targets, and tests can capture output with a
//! [`MemoryDestination`] instead of touching the terminal.
//!
//! # Example
//!
//! ```rust
//! use linestats::io::destinations::{MemoryDestination, OutputDestination};
//!
//! let dest = MemoryDestination::new();
//! dest.write_str("COUNT: 3\n").unwrap();
//! assert_eq!(dest.get_content(), "COUNT: 3\n");
//! ```

use crate::errors::ToolError;
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A target that receives report text.
pub trait OutputDestination {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<(), ToolError>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<(), ToolError>;

    /// Description of the destination for error messages.
    fn description(&self) -> String;
}

/// Results file. Each write replaces the file's contents.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<(), ToolError> {
        std::fs::write(&self.path, content)
            .map_err(|e| ToolError::write(self.description(), e.to_string()))
    }

    fn flush(&self) -> Result<(), ToolError> {
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory destination, mainly for tests.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Rc<RefCell<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_content(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<(), ToolError> {
        self.buffer.borrow_mut().push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<(), ToolError> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<(), ToolError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .map_err(|e| ToolError::write(self.description(), e.to_string()))
    }

    fn flush(&self) -> Result<(), ToolError> {
        io::stdout()
            .lock()
            .flush()
            .map_err(|e| ToolError::write(self.description(), e.to_string()))
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}
