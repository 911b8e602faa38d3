//! Line-oriented value parsing.
//!
//! Every tool consumes its input the same way: one record per line, leading
//! and trailing whitespace ignored, blank lines skipped entirely. A non-blank
//! line that does not parse is a *malformed entry*. It is kept aside for
//! reporting and excluded from the values, but it still counts as examined.
//!
//! The scanner is generic over an [`EntryKind`], which supplies the parse
//! function and the human-readable label used in warnings.

/// A kind of value that can be read from a single trimmed line.
pub trait EntryKind {
    type Value;

    /// Label used in diagnostics ("number", "integer").
    const LABEL: &'static str;

    /// Parse a trimmed, non-empty line. `None` marks a malformed entry.
    fn parse(text: &str) -> Option<Self::Value>;
}

/// Finite floating-point numbers.
///
/// `NaN` and the infinities are rejected: they have no place in an ordered,
/// averaged sample.
#[derive(Debug, Clone, Copy)]
pub struct Number;

impl EntryKind for Number {
    type Value = f64;
    const LABEL: &'static str = "number";

    fn parse(text: &str) -> Option<f64> {
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Signed 64-bit integers, with an optional leading sign.
#[derive(Debug, Clone, Copy)]
pub struct Integer;

impl EntryKind for Integer {
    type Value = i64;
    const LABEL: &'static str = "integer";

    fn parse(text: &str) -> Option<i64> {
        text.parse::<i64>().ok()
    }
}

/// A successfully parsed value and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub line: usize,
    pub value: T,
}

/// A non-blank line that did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    pub line: usize,
    pub text: String,
}

impl InvalidEntry {
    /// Warning shown to the user for this entry.
    pub fn message(&self, label: &str) -> String {
        format!("Error: '{}' is not a valid {}, skipping.", self.text, label)
    }
}

/// Result of scanning an input for one [`EntryKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineScan<T> {
    /// Non-blank lines inspected, valid or not.
    pub examined: usize,
    pub entries: Vec<Entry<T>>,
    pub invalid: Vec<InvalidEntry>,
}

impl<T> Default for LineScan<T> {
    fn default() -> Self {
        Self {
            examined: 0,
            entries: Vec::new(),
            invalid: Vec::new(),
        }
    }
}

impl<T> LineScan<T> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|entry| &entry.value)
    }

    pub fn into_values(self) -> Vec<T> {
        self.entries.into_iter().map(|entry| entry.value).collect()
    }
}

/// Iterate over trimmed, non-blank lines with their 1-based line numbers.
///
/// Blank lines still advance the line counter.
pub fn non_blank_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Scan `content` line by line, parsing each record as `K`.
pub fn scan_lines<K: EntryKind>(content: &str) -> LineScan<K::Value> {
    let mut scan = LineScan::default();

    for (line, text) in non_blank_lines(content) {
        scan.examined += 1;
        match K::parse(text) {
            Some(value) => scan.entries.push(Entry { line, value }),
            None => {
                log::debug!("line {}: rejected {} '{}'", line, K::LABEL, text);
                scan.invalid.push(InvalidEntry {
                    line,
                    text: text.to_string(),
                });
            }
        }
    }

    scan
}
