//! # Gutensearch
//!
//! An in-memory inverted-index boolean search engine with a Zipf's-law
//! term-frequency analyzer.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Incremental document ingestion over an append-only corpus
//! - Boolean queries with implicit AND and explicit NOT
//! - Corpus-wide term-frequency table and Zipf ranking
//! - Flexible text analysis pipeline (tokenizer + filters)
//! - C-compatible binary call boundary for external orchestrators
//!
//! ## Quick start
//!
//! ```
//! use gutensearch::engine::SearchEngine;
//!
//! let mut engine = SearchEngine::new();
//! engine.ingest_document("the quick brown fox", 0).unwrap();
//! engine.ingest_document("the lazy dog", 1).unwrap();
//!
//! let hits = engine.search("quick NOT dog").unwrap();
//! assert_eq!(hits, vec![0]);
//! ```

pub mod analysis;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod index;
pub mod query;
pub mod zipf;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
    pub use crate::engine::SearchEngine;
    pub use crate::error::{GutensearchError, Result};
    pub use crate::index::posting::DocId;
    pub use crate::query::boolean::BooleanQuery;
    pub use crate::zipf::analyzer::{TermFrequency, ZipfReport};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
