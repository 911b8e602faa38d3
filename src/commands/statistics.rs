use anyhow::Result;
use std::time::Instant;

use super::{emit_report, report_invalid, RunOptions};
use crate::errors::ToolError;
use crate::formatting::Diagnostics;
use crate::io::read_input;
use crate::parse::{scan_lines, EntryKind, Number};
use crate::report::{RenderedReport, StatisticsReport};
use crate::stats::describe;

/// Compute descriptive statistics for the numbers in `options.input`.
///
/// Fails without writing anything when no line holds a valid number.
pub fn run(options: &RunOptions, diagnostics: &dyn Diagnostics) -> Result<RenderedReport> {
    let start = Instant::now();

    let content = read_input(&options.input)?;
    let scan = scan_lines::<Number>(&content);
    report_invalid::<Number>(&scan, diagnostics);

    if scan.is_empty() {
        return Err(ToolError::no_valid_data(&options.input, Number::LABEL).into());
    }

    let examined = scan.examined;
    let summary = describe(scan.into_values()).map_err(ToolError::from)?;
    let report = StatisticsReport { examined, summary };
    let rendered = RenderedReport::new(&report, start.elapsed());

    emit_report(&rendered, options)?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::CollectedDiagnostics;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn setup(content: &str) -> (TempDir, RunOptions) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("TC1.txt");
        fs::write(&input, content).unwrap();
        let options = RunOptions::new(input, dir.path()).quiet();
        (dir, options)
    }

    #[test]
    fn test_writes_results_file() {
        let (dir, options) = setup("4\n8\n6\n5\n3\n2\n8\n9\n2\n5\n");
        let diagnostics = CollectedDiagnostics::new();

        let rendered = run(&options, &diagnostics).unwrap();

        let written = fs::read_to_string(dir.path().join("StatisticsResults.txt")).unwrap();
        assert_eq!(written, rendered.text());
        assert_eq!(rendered.body()[0], "COUNT: 10");
        assert_eq!(rendered.body()[3], "MODE: 8.0");
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn test_count_includes_invalid_entries() {
        let (_dir, options) = setup("1\nabc\n\n3\n");
        let diagnostics = CollectedDiagnostics::new();

        let rendered = run(&options, &diagnostics).unwrap();

        assert_eq!(rendered.body()[0], "COUNT: 3");
        assert_eq!(rendered.body()[1], "MEAN: 2.0");
        assert_eq!(
            diagnostics.warnings(),
            vec!["Error: 'abc' is not a valid number, skipping.".to_string()]
        );
    }

    #[test]
    fn test_no_valid_numbers_is_fatal() {
        let (dir, options) = setup("abc\n\nxyz\n");
        let diagnostics = CollectedDiagnostics::new();

        let err = run(&options, &diagnostics).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ToolError>(),
            Some(ToolError::NoValidData { .. })
        ));
        assert!(!dir.path().join("StatisticsResults.txt").exists());
        assert_eq!(diagnostics.warnings().len(), 2);
    }

    #[test]
    fn test_missing_input_is_read_error() {
        let dir = TempDir::new().unwrap();
        let options = RunOptions::new(dir.path().join("absent.txt"), dir.path()).quiet();

        let err = run(&options, &CollectedDiagnostics::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ToolError>(),
            Some(ToolError::Read { .. })
        ));
    }

    #[test]
    fn test_single_value_reports_undefined_variance() {
        let (_dir, options) = setup("42\n");
        let rendered = run(&options, &CollectedDiagnostics::new()).unwrap();
        assert_eq!(
            rendered.body(),
            &[
                "COUNT: 1".to_string(),
                "MEAN: 42.0".to_string(),
                "MEDIAN: 42.0".to_string(),
                "MODE: N/A".to_string(),
                "SD: 0.0".to_string(),
                "VARIANCE: N/A".to_string(),
            ]
        );
    }
}
