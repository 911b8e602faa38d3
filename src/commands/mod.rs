//! Command implementations for the three tools.
//!
//! Each command reads its input, reports malformed entries, computes its
//! aggregate, renders the report and emits it to stdout and the results file:
//!
//! - **statistics**: `compute-statistics`
//! - **convert**: `convert-numbers`
//! - **word_count**: `word-count`

pub mod convert;
pub mod statistics;
pub mod word_count;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::formatting::Diagnostics;
use crate::io::{ensure_dir, FileDestination, OutputDestination, StdoutDestination};
use crate::parse::{EntryKind, LineScan};
use crate::report::RenderedReport;

/// Inputs shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    /// Directory receiving the results file.
    pub output_dir: PathBuf,
    /// Also print the report to stdout.
    pub echo_stdout: bool,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            echo_stdout: true,
        }
    }

    pub fn quiet(mut self) -> Self {
        self.echo_stdout = false;
        self
    }

    pub fn results_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Warn about every malformed entry of a scan.
pub(crate) fn report_invalid<K: EntryKind>(scan: &LineScan<K::Value>, diagnostics: &dyn Diagnostics) {
    for entry in &scan.invalid {
        diagnostics.warning(&entry.message(K::LABEL));
    }
    if !scan.invalid.is_empty() {
        log::info!(
            "skipped {} of {} non-blank lines",
            scan.invalid.len(),
            scan.examined
        );
    }
}

/// Send a rendered report to stdout (when enabled) and the results file.
pub(crate) fn emit_report(rendered: &RenderedReport, options: &RunOptions) -> Result<()> {
    ensure_dir(&options.output_dir)?;

    let stdout = StdoutDestination::new();
    let file = FileDestination::new(options.results_path(rendered.file_name));

    let mut destinations: Vec<&dyn OutputDestination> = Vec::with_capacity(2);
    if options.echo_stdout {
        destinations.push(&stdout);
    }
    destinations.push(&file);

    rendered
        .emit(&destinations)
        .with_context(|| format!("could not save {}", rendered.file_name))?;
    log::info!("results written to {}", file.path().display());
    Ok(())
}
