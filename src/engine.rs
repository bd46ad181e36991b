//! High-level search engine that ties together the index, the frequency
//! table, and query evaluation.
//!
//! [`SearchEngine`] is an explicit owned context: callers instantiate as
//! many independent engines as they like and tear them down by dropping
//! them, with no process-global state involved. The C binary boundary in
//! [`crate::ffi`] wraps a single engine for callers bound to the external
//! call contract.
//!
//! # Examples
//!
//! ```
//! use gutensearch::engine::SearchEngine;
//!
//! let mut engine = SearchEngine::new();
//! engine.ingest_document_with_frequency("cat cat dog", 0).unwrap();
//!
//! assert_eq!(engine.search("cat").unwrap(), vec![0]);
//! assert_eq!(engine.frequencies().count("cat"), 2);
//!
//! let report = engine.analyze_zipf();
//! assert_eq!(report.entries()[0].term, "cat");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::index::inverted::{IndexStats, InvertedIndex};
use crate::index::posting::DocId;
use crate::query::parser::QueryParser;
use crate::zipf::analyzer::ZipfReport;
use crate::zipf::frequency::FrequencyTable;

/// An owned search context: inverted index, frequency table, and the
/// shared analyzer that keys both.
///
/// Single-threaded by design: every operation runs to completion before
/// returning, and callers wanting cross-thread access must serialize it
/// externally.
pub struct SearchEngine {
    analyzer: Arc<dyn Analyzer>,
    index: InvertedIndex,
    frequencies: FrequencyTable,
    parser: QueryParser,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("index", &self.index)
            .field("distinct_terms", &self.frequencies.len())
            .finish()
    }
}

impl SearchEngine {
    /// Create a new engine with the standard analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::default()))
    }

    /// Create a new engine with a custom analyzer.
    ///
    /// The same analyzer instance drives indexing, frequency counting,
    /// and query parsing.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        SearchEngine {
            index: InvertedIndex::with_analyzer(Arc::clone(&analyzer)),
            parser: QueryParser::with_analyzer(Arc::clone(&analyzer)),
            frequencies: FrequencyTable::new(),
            analyzer,
        }
    }

    /// Ingest one document into the index.
    ///
    /// Content is borrowed for the duration of the call; the engine copies
    /// the term text it retains.
    pub fn ingest_document(&mut self, content: &str, doc_id: DocId) -> Result<()> {
        self.index.ingest(content, doc_id)
    }

    /// Ingest one document into the index and, in the same pass, count
    /// every term occurrence into the frequency table.
    ///
    /// Unlike posting-list membership, frequency counting is not
    /// deduplicated: each occurrence within the document increments its
    /// term's count.
    pub fn ingest_document_with_frequency(&mut self, content: &str, doc_id: DocId) -> Result<()> {
        let terms: Vec<String> = self.analyzer.analyze(content)?.map(|t| t.text).collect();
        for term in &terms {
            self.index.insert(term, doc_id);
            self.frequencies.add(term);
        }
        Ok(())
    }

    /// Increment the frequency count for one pre-normalized term.
    pub fn add_term_frequency(&mut self, term: &str) {
        self.frequencies.add(term);
    }

    /// Evaluate a boolean query string and return matching document ids
    /// in ascending order.
    pub fn search(&self, query_str: &str) -> Result<Vec<DocId>> {
        let query = self.parser.parse(query_str)?;
        Ok(query.execute(&self.index))
    }

    /// Produce the Zipf ranking of the frequency table.
    pub fn analyze_zipf(&self) -> ZipfReport {
        ZipfReport::analyze(&self.frequencies)
    }

    /// Write the Zipf ranking to a CSV file.
    pub fn save_zipf_csv<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        crate::zipf::csv::write_zipf_csv(path, &self.analyze_zipf())
    }

    /// Get the inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Get the inverted index mutably, for callers inserting
    /// pre-normalized terms directly.
    pub fn index_mut(&mut self) -> &mut InvertedIndex {
        &mut self.index
    }

    /// Get the frequency table.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Clear the index, keeping the frequency table.
    pub fn reset_index(&mut self) {
        self.index.clear();
    }

    /// Clear the frequency table, keeping the index.
    pub fn reset_frequencies(&mut self) {
        self.frequencies.clear();
    }

    /// Clear both the index and the frequency table.
    pub fn clear(&mut self) {
        self.index.clear();
        self.frequencies.clear();
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
