//! Zipf ranking over the frequency table.
//!
//! Zipf's law predicts that a term's frequency is roughly inversely
//! proportional to its frequency rank. [`ZipfReport`] materializes the
//! ranking: every term ever counted, sorted by frequency descending with
//! ties broken by ascending term order so the output is reproducible
//! across runs with identical input.

use serde::{Deserialize, Serialize};

use crate::zipf::frequency::FrequencyTable;

/// One (term, frequency) pair in a Zipf ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    /// The normalized term.
    pub term: String,
    /// Total occurrences across the corpus.
    pub frequency: u64,
}

/// A deterministically ordered frequency ranking.
///
/// # Examples
///
/// ```
/// use gutensearch::zipf::frequency::FrequencyTable;
/// use gutensearch::zipf::analyzer::ZipfReport;
///
/// let mut table = FrequencyTable::new();
/// table.add("cat");
/// table.add("cat");
/// table.add("dog");
///
/// let report = ZipfReport::analyze(&table);
/// assert_eq!(report.entries()[0].term, "cat");
/// assert_eq!(report.entries()[0].frequency, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipfReport {
    entries: Vec<TermFrequency>,
}

impl ZipfReport {
    /// Build the ranking from a frequency table.
    ///
    /// Sorts by frequency descending, ties by ascending term. Repeated
    /// invocations over the same table produce identical orderings.
    pub fn analyze(table: &FrequencyTable) -> Self {
        let mut entries: Vec<TermFrequency> = table
            .iter()
            .map(|(term, frequency)| TermFrequency {
                term: term.to_string(),
                frequency,
            })
            .collect();

        entries.sort_unstable_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.term.cmp(&b.term))
        });

        ZipfReport { entries }
    }

    /// The ranked entries, highest frequency first.
    pub fn entries(&self) -> &[TermFrequency] {
        &self.entries
    }

    /// Number of ranked terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the report is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate as (1-based rank, entry) pairs.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &TermFrequency)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry))
    }

    /// The ideal Zipf frequency for a 1-based rank, `C / rank`, where `C`
    /// is the observed frequency of the top-ranked term.
    ///
    /// Returns `None` for an empty report or rank 0.
    pub fn expected_frequency(&self, rank: usize) -> Option<f64> {
        if rank == 0 {
            return None;
        }
        let top = self.entries.first()?.frequency as f64;
        Some(top / rank as f64)
    }
}
