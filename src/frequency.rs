//! Token frequency tabulation.
//!
//! A [`FrequencyTable`] maps each distinct token to the number of times it
//! occurs. Tokens are whole input lines with surrounding whitespace removed;
//! matching is exact and case-sensitive, and blank lines are never tokens.
//!
//! The ranking is fully deterministic: descending count, then ascending
//! lexical order of the token.

use std::collections::HashMap;

use crate::parse::non_blank_lines;

/// Occurrence counts for a set of tokens. Every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

/// One row of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedToken<'a> {
    pub token: &'a str,
    pub count: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from line-delimited text.
    pub fn from_lines(content: &str) -> Self {
        let mut table = Self::new();
        for (_, token) in non_blank_lines(content) {
            table.record(token);
        }
        log::debug!(
            "tabulated {} tokens ({} distinct)",
            table.grand_total(),
            table.distinct()
        );
        table
    }

    /// Count one occurrence of `token`. Blank tokens are ignored.
    pub fn record(&mut self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            return;
        }
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens recorded.
    pub fn grand_total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Tokens by descending count, ties in ascending lexical order.
    pub fn ranked(&self) -> Vec<RankedToken<'_>> {
        let mut ranked: Vec<RankedToken<'_>> = self
            .counts
            .iter()
            .map(|(token, &count)| RankedToken { token, count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(b.token)));
        ranked
    }
}
