//! The in-memory inverted index.
//!
//! Maps each normalized term to its [`PostingList`]. The index is
//! append-only: documents are ingested incrementally and the only way to
//! remove data is a full [`clear`](InvertedIndex::clear).
//!
//! # Examples
//!
//! ```
//! use gutensearch::index::inverted::InvertedIndex;
//!
//! let mut index = InvertedIndex::new();
//! index.ingest("the quick brown fox", 0).unwrap();
//! index.ingest("the lazy dog", 1).unwrap();
//!
//! let postings = index.postings("quick").unwrap();
//! assert_eq!(postings.doc_ids(), &[0]);
//! assert!(index.postings("cat").is_none());
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::index::posting::{DocId, PostingList};

/// Statistics about an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of unique terms in the index.
    pub term_count: u64,

    /// Total number of postings (term, doc) pairs.
    pub posting_count: u64,
}

/// An in-memory inverted index mapping terms to posting lists.
///
/// Term text is copied into the index on insertion; the index never
/// retains references to caller-owned input buffers.
pub struct InvertedIndex {
    /// Term -> posting list.
    postings: AHashMap<String, PostingList>,

    /// The analyzer used to derive terms during ingestion.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for InvertedIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvertedIndex")
            .field("term_count", &self.postings.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl InvertedIndex {
    /// Create a new empty index with the standard analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::default()))
    }

    /// Create a new empty index with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        InvertedIndex {
            postings: AHashMap::new(),
            analyzer,
        }
    }

    /// Get the analyzer used by this index.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Ingest one document: analyze `content` and add `doc_id` to the
    /// posting list of every distinct term it contains.
    ///
    /// Repeated occurrences of a term within the document insert its id
    /// only once. Analysis runs to completion before any posting is
    /// touched, so a failed analysis leaves the index unchanged.
    pub fn ingest(&mut self, content: &str, doc_id: DocId) -> Result<()> {
        let terms: Vec<String> = self.analyzer.analyze(content)?.map(|t| t.text).collect();
        for term in terms {
            self.insert(&term, doc_id);
        }
        Ok(())
    }

    /// Add a single pre-normalized term occurrence for `doc_id`.
    ///
    /// A repeated (term, doc_id) pair is a no-op. Empty terms are ignored.
    pub fn insert(&mut self, term: &str, doc_id: DocId) {
        if term.is_empty() {
            return;
        }
        self.postings
            .entry(term.to_string())
            .or_default()
            .insert(doc_id);
    }

    /// Look up the posting list for a term, if the term is indexed.
    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Number of unique terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Check if the index holds no postings.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate over the indexed terms (arbitrary order).
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(|s| s.as_str())
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            term_count: self.postings.len() as u64,
            posting_count: self.postings.values().map(|p| p.len() as u64).sum(),
        }
    }

    /// Clear all postings, returning the index to its initial empty state.
    ///
    /// Idempotent; safe to call when already empty.
    pub fn clear(&mut self) {
        self.postings.clear();
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}
