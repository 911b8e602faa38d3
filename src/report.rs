//! Report rendering.
//!
//! Each tool renders its results as a list of lines, appends the elapsed-time
//! footer and sends the identical text to every destination. The line formats
//! are read back by external test harnesses and must not drift:
//!
//! - statistics: `COUNT:`, `MEAN:`, `MEDIAN:`, `MODE:`, `SD:`, `VARIANCE:`
//! - conversion: `ITEM\tVALUE\tBIN\tHEX` header, one tab-separated row per value
//! - word count: `word\tcount` rows, then `Grand Total\t<sum>`

use std::time::Duration;

use crate::convert::ConversionRecord;
use crate::errors::ToolError;
use crate::frequency::FrequencyTable;
use crate::io::OutputDestination;
use crate::stats::Summary;

/// Placeholder for a figure that does not exist for the input.
pub const NOT_AVAILABLE: &str = "N/A";

/// A report body, before the elapsed-time footer.
pub trait Report {
    /// Name of the results file in the output directory.
    const FILE_NAME: &'static str;

    fn lines(&self) -> Vec<String>;
}

/// Render a float the way a human expects to read it back.
///
/// Shortest round-trip digits, with integral values keeping a trailing `.0`
/// (`5.0`, not `5`).
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_float)
}

pub fn elapsed_line(elapsed: Duration) -> String {
    format!("Elapsed Time: {:.6} seconds", elapsed.as_secs_f64())
}

/// Output of `compute-statistics`.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsReport {
    /// Non-blank lines examined, malformed ones included.
    pub examined: usize,
    pub summary: Summary,
}

impl Report for StatisticsReport {
    const FILE_NAME: &'static str = "StatisticsResults.txt";

    fn lines(&self) -> Vec<String> {
        let s = &self.summary;
        vec![
            format!("COUNT: {}", self.examined),
            format!("MEAN: {}", format_float(s.mean)),
            format!("MEDIAN: {}", format_float(s.median)),
            format!("MODE: {}", format_optional(s.mode)),
            format!("SD: {}", format_float(s.dispersion.std_dev)),
            format!("VARIANCE: {}", format_optional(s.dispersion.sample_variance)),
        ]
    }
}

/// Output of `convert-numbers`.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub records: Vec<ConversionRecord>,
}

impl Report for ConversionReport {
    const FILE_NAME: &'static str = "ConvertionResults.txt";

    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.records.len() + 1);
        lines.push("ITEM\tVALUE\tBIN\tHEX".to_string());
        lines.extend(self.records.iter().map(|r| {
            format!("{}\t{}\t{}\t{}", r.item, r.value, r.binary, r.hexadecimal)
        }));
        lines
    }
}

/// Output of `word-count`.
#[derive(Debug, Clone, Copy)]
pub struct WordCountReport<'a> {
    pub table: &'a FrequencyTable,
}

impl Report for WordCountReport<'_> {
    const FILE_NAME: &'static str = "WordCountResults.txt";

    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .table
            .ranked()
            .into_iter()
            .map(|row| format!("{}\t{}", row.token, row.count))
            .collect();
        lines.push(format!("Grand Total\t{}", self.table.grand_total()));
        lines
    }
}

/// A finished report, footer included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub file_name: &'static str,
    pub lines: Vec<String>,
}

impl RenderedReport {
    pub fn new<R: Report>(report: &R, elapsed: Duration) -> Self {
        let mut lines = report.lines();
        lines.push(elapsed_line(elapsed));
        Self {
            file_name: R::FILE_NAME,
            lines,
        }
    }

    /// Newline-terminated report text.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Lines without the elapsed-time footer.
    pub fn body(&self) -> &[String] {
        match self.lines.split_last() {
            Some((_, body)) => body,
            None => &[],
        }
    }

    /// Write the report to every destination, stopping at the first failure.
    pub fn emit(&self, destinations: &[&dyn OutputDestination]) -> Result<(), ToolError> {
        let text = self.text();
        for destination in destinations {
            log::debug!("writing {} to {}", self.file_name, destination.description());
            destination.write_str(&text)?;
            destination.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;
    use crate::io::MemoryDestination;
    use crate::stats::describe;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(5.0), "5.0");
        assert_eq!(format_float(5.2), "5.2");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(1e21), "1000000000000000000000.0");
        assert_eq!(format_float(f64::NAN), "NaN");
    }

    #[test]
    fn test_elapsed_line_has_six_decimals() {
        assert_eq!(
            elapsed_line(Duration::from_micros(1_500)),
            "Elapsed Time: 0.001500 seconds"
        );
    }

    #[test]
    fn test_statistics_lines() {
        let summary = describe(vec![4.0, 8.0, 6.0, 5.0, 3.0, 2.0, 8.0, 9.0, 2.0, 5.0]).unwrap();
        let report = StatisticsReport {
            examined: 12,
            summary,
        };
        let lines = report.lines();
        assert_eq!(lines[0], "COUNT: 12");
        assert_eq!(lines[1], "MEAN: 5.2");
        assert_eq!(lines[2], "MEDIAN: 5.0");
        assert_eq!(lines[3], "MODE: 8.0");
        let sd: f64 = lines[4].trim_start_matches("SD: ").parse().unwrap();
        let variance: f64 = lines[5].trim_start_matches("VARIANCE: ").parse().unwrap();
        assert!((sd - 2.4).abs() < 1e-9);
        assert!((variance - 6.4).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_not_available_figures() {
        let report = StatisticsReport {
            examined: 1,
            summary: describe(vec![3.0]).unwrap(),
        };
        let lines = report.lines();
        assert_eq!(lines[3], "MODE: N/A");
        assert_eq!(lines[4], "SD: 0.0");
        assert_eq!(lines[5], "VARIANCE: N/A");
    }

    #[test]
    fn test_conversion_lines() {
        let report = ConversionReport {
            records: vec![convert(1, 5), convert(3, -1)],
        };
        assert_eq!(
            report.lines(),
            vec![
                "ITEM\tVALUE\tBIN\tHEX",
                "1\t5\t101\t5",
                "3\t-1\t1111111111\tFFFFFFFFFF",
            ]
        );
    }

    #[test]
    fn test_word_count_lines() {
        let table = FrequencyTable::from_lines("cat\ndog\ncat\nbird\n");
        let report = WordCountReport { table: &table };
        assert_eq!(
            report.lines(),
            vec!["cat\t2", "bird\t1", "dog\t1", "Grand Total\t4"]
        );
    }

    #[test]
    fn test_empty_word_count_still_has_total() {
        let table = FrequencyTable::new();
        let report = WordCountReport { table: &table };
        assert_eq!(report.lines(), vec!["Grand Total\t0"]);
    }

    #[test]
    fn test_rendered_report_emits_identical_text() {
        let report = ConversionReport::default();
        let rendered = RenderedReport::new(&report, Duration::from_millis(2));
        assert_eq!(rendered.file_name, "ConvertionResults.txt");
        assert_eq!(rendered.body(), &["ITEM\tVALUE\tBIN\tHEX".to_string()]);

        let first = MemoryDestination::new();
        let second = MemoryDestination::new();
        let destinations: [&dyn OutputDestination; 2] = [&first, &second];
        rendered.emit(&destinations).unwrap();

        assert_eq!(
            first.get_content(),
            "ITEM\tVALUE\tBIN\tHEX\nElapsed Time: 0.002000 seconds\n"
        );
        assert_eq!(first.get_content(), second.get_content());
    }
}
