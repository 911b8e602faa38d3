//! Error types shared by the three line-oriented tools.
//!
//! Fatal conditions are modelled by [`ToolError`]. Every variant carries a
//! stable [`ErrorCode`] so scripts can tell a usage mistake from an I/O
//! failure without parsing the message text:
//!
//! - E001-E009: I/O and filesystem errors
//! - E020-E029: Configuration errors
//! - E030-E039: Data errors (nothing usable in the input)
//! - E040-E049: CLI errors
//!
//! Malformed input lines are *not* errors at this level; they are collected
//! by [`crate::parse::LineScan`] and reported as warnings.
//!
//! # Example
//!
//! ```rust
//! use linestats::errors::{ErrorCode, ToolError};
//!
//! let err = ToolError::no_valid_data("numbers.txt", "number");
//! assert_eq!(err.code(), ErrorCode::DATA_EMPTY);
//! assert_eq!(err.exit_code(), 1);
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::stats::StatsError;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - input could not be read
    pub const IO_READ: ErrorCode = ErrorCode("E001");
    /// I/O error - results could not be written
    pub const IO_WRITE: ErrorCode = ErrorCode("E002");

    /// Config error - invalid file contents
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");

    /// Data error - no usable values in the input
    pub const DATA_EMPTY: ErrorCode = ErrorCode("E030");
    /// Data error - aggregate could not be computed
    pub const DATA_STATISTICS: ErrorCode = ErrorCode("E031");

    /// CLI error - missing argument
    pub const CLI_MISSING_ARG: ErrorCode = ErrorCode("E041");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fatal errors that abort a run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The required input path was not supplied.
    #[error("Usage: {program} <file>")]
    Usage { program: &'static str },

    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A results destination could not be written.
    #[error("failed to write {destination}: {message}")]
    Write { destination: String, message: String },

    /// Nothing in the input parsed as the expected kind of value.
    #[error("no valid {kind}s found in {}", path.display())]
    NoValidData { path: PathBuf, kind: &'static str },

    /// The configuration file exists but is not usable.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// The statistics engine rejected the sample.
    #[error(transparent)]
    Statistics(#[from] StatsError),
}

impl ToolError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(destination: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            destination: destination.into(),
            message: message.into(),
        }
    }

    pub fn no_valid_data(path: impl Into<PathBuf>, kind: &'static str) -> Self {
        Self::NoValidData {
            path: path.into(),
            kind,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Stable code for this error category.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Usage { .. } => ErrorCode::CLI_MISSING_ARG,
            Self::Read { .. } => ErrorCode::IO_READ,
            Self::Write { .. } => ErrorCode::IO_WRITE,
            Self::NoValidData { .. } => ErrorCode::DATA_EMPTY,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
            Self::Statistics(_) => ErrorCode::DATA_STATISTICS,
        }
    }

    /// Process exit status for this error.
    ///
    /// All fatal conditions share status 1, which is what callers of the
    /// tools test for.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
