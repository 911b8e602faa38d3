use anyhow::Result;
use std::time::Instant;

use super::{emit_report, report_invalid, RunOptions};
use crate::convert::convert;
use crate::formatting::Diagnostics;
use crate::io::read_input;
use crate::parse::{scan_lines, Integer};
use crate::report::{ConversionReport, RenderedReport};

/// Convert every integer in `options.input` to binary and hexadecimal.
///
/// Rows are numbered by the line the integer appeared on. An input without
/// valid integers produces a header-only report.
pub fn run(options: &RunOptions, diagnostics: &dyn Diagnostics) -> Result<RenderedReport> {
    let start = Instant::now();

    let content = read_input(&options.input)?;
    let scan = scan_lines::<Integer>(&content);
    report_invalid::<Integer>(&scan, diagnostics);

    let report = ConversionReport {
        records: scan
            .entries
            .iter()
            .map(|entry| convert(entry.line, entry.value))
            .collect(),
    };
    let rendered = RenderedReport::new(&report, start.elapsed());

    emit_report(&rendered, options)?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::CollectedDiagnostics;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn setup(content: &str) -> (TempDir, RunOptions) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("TC4.txt");
        fs::write(&input, content).unwrap();
        let options = RunOptions::new(input, dir.path()).quiet();
        (dir, options)
    }

    #[test]
    fn test_rows_numbered_by_line() {
        let (dir, options) = setup(indoc! {"
            5
            ABC
            -1

            0
        "});
        let diagnostics = CollectedDiagnostics::new();

        let rendered = run(&options, &diagnostics).unwrap();

        assert_eq!(
            rendered.body(),
            &[
                "ITEM\tVALUE\tBIN\tHEX".to_string(),
                "1\t5\t101\t5".to_string(),
                "3\t-1\t1111111111\tFFFFFFFFFF".to_string(),
                "5\t0\t0\t0".to_string(),
            ]
        );
        assert_eq!(
            diagnostics.warnings(),
            vec!["Error: 'ABC' is not a valid integer, skipping.".to_string()]
        );
        let written = fs::read_to_string(dir.path().join("ConvertionResults.txt")).unwrap();
        assert_eq!(written, rendered.text());
    }

    #[test]
    fn test_only_invalid_lines_gives_header_only() {
        let (_dir, options) = setup("ERR\nVAL\n");
        let rendered = run(&options, &CollectedDiagnostics::new()).unwrap();
        assert_eq!(rendered.body(), &["ITEM\tVALUE\tBIN\tHEX".to_string()]);
    }

    #[test]
    fn test_decimal_values_are_not_integers() {
        let (_dir, options) = setup("2.5\n7\n");
        let diagnostics = CollectedDiagnostics::new();
        let rendered = run(&options, &diagnostics).unwrap();
        assert_eq!(rendered.body().len(), 2);
        assert_eq!(diagnostics.warnings().len(), 1);
    }
}
