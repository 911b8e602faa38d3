// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod errors;
pub mod formatting;
pub mod frequency;
pub mod io;
pub mod logging;
pub mod parse;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use crate::convert::{convert, to_binary, to_hexadecimal, ConversionRecord, FixedWidth};
pub use crate::errors::{ErrorCode, ToolError};
pub use crate::frequency::{FrequencyTable, RankedToken};
pub use crate::parse::{scan_lines, EntryKind, Integer, LineScan, Number};
pub use crate::report::{RenderedReport, Report};
pub use crate::stats::{describe, newton_sqrt, sqrt, Sample, StatsError, Summary};
