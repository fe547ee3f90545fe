// src/stats/languages.rs
// =============================================================================
// This module counts how many repositories use each primary language.
//
// How it works:
// 1. Start with an empty tally
// 2. Walk the repositories in order
// 3. For each repository that has a language, add one to that language
// 4. Repositories without a language are skipped (no "Unknown" bucket)
//
// The tally also knows how to turn itself into chart data: one slice per
// language with its share of the total and a colour from a small palette.
//
// Rust concepts:
// - Iterator::fold: accumulate a value while walking a sequence
// - BTreeMap: a map that keeps its keys sorted (stable JSON output)
// - #[serde(transparent)]: serialize a wrapper as the thing it wraps
// =============================================================================

use serde::Serialize;
use std::collections::BTreeMap;

use crate::github::RepositorySummary;

/// Colours handed out to chart slices, in order, wrapping around.
pub const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8"];

// Language name -> number of repositories using it
//
// Every count is at least 1 and the counts add up to the number of
// repositories that have a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageTally {
    counts: BTreeMap<String, usize>,
}

/// One language's share of a tally, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub language: String,
    pub count: usize,
    /// Share of the tally total, 0.0 to 100.0
    pub percent: f64,
    pub color: &'static str,
}

impl LanguageTally {
    /// Adds one repository for `language`.
    fn record(&mut self, language: &str) {
        *self.counts.entry(language.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, language: &str) -> Option<usize> {
        self.counts.get(language).copied()
    }

    /// Number of distinct languages
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of repositories that were counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(lang, count)| (lang.as_str(), *count))
    }

    /// Chart data, largest slice first (ties broken by name).
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        let total = self.total();
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        entries
            .into_iter()
            .enumerate()
            .map(|(index, (language, count))| ChartSlice {
                language: language.to_string(),
                count,
                percent: count as f64 * 100.0 / total as f64,
                color: PALETTE[index % PALETTE.len()],
            })
            .collect()
    }
}

/// Tallies the primary languages of `repos`.
pub fn aggregate(repos: &[RepositorySummary]) -> LanguageTally {
    repos
        .iter()
        .filter_map(RepositorySummary::primary_language)
        .fold(LanguageTally::default(), |mut tally, language| {
            tally.record(language);
            tally
        })
}
