//! The corpus-wide term-frequency table.
//!
//! Counts total occurrences per term across the whole corpus, not
//! document-level presence: for any term, its count here is at least the
//! length of its posting list, with equality only when the term appears
//! at most once per document.

use ahash::AHashMap;

/// A table of occurrence counts per normalized term.
///
/// # Examples
///
/// ```
/// use gutensearch::zipf::frequency::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
/// table.add("cat");
/// table.add("cat");
/// table.add("dog");
///
/// assert_eq!(table.count("cat"), 2);
/// assert_eq!(table.count("dog"), 1);
/// assert_eq!(table.count("fish"), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
}

impl FrequencyTable {
    /// Create a new empty frequency table.
    pub fn new() -> Self {
        FrequencyTable {
            counts: AHashMap::new(),
        }
    }

    /// Increment the occurrence count for one pre-normalized term.
    ///
    /// Empty terms are ignored. The term text is copied on first sight.
    pub fn add(&mut self, term: &str) {
        if term.is_empty() {
            return;
        }
        *self.counts.entry(term.to_string()).or_insert(0) += 1;
    }

    /// Get the occurrence count for a term (0 when never seen).
    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (term, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Clear all frequency records.
    ///
    /// Idempotent; safe to call when already empty.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
