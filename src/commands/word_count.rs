use anyhow::Result;
use std::time::Instant;

use super::{emit_report, RunOptions};
use crate::frequency::FrequencyTable;
use crate::io::read_input;
use crate::report::{RenderedReport, WordCountReport};

/// Count how often each distinct line of `options.input` occurs.
///
/// Every non-blank line is a valid token, so nothing is ever skipped.
pub fn run(options: &RunOptions) -> Result<RenderedReport> {
    let start = Instant::now();

    let content = read_input(&options.input)?;
    let table = FrequencyTable::from_lines(&content);
    let report = WordCountReport { table: &table };
    let rendered = RenderedReport::new(&report, start.elapsed());

    emit_report(&rendered, options)?;
    Ok(rendered)
}
