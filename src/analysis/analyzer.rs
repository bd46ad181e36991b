//! Analyzer implementations that combine tokenizers and filters.
//!
//! An analyzer is the complete text processing pipeline, from raw text to
//! normalized terms. The [`StandardAnalyzer`] is used everywhere terms are
//! derived — indexing, frequency counting, and query parsing — so index
//! keys and frequency-table keys are always comparable.
//!
//! # Examples
//!
//! ```
//! use gutensearch::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms: Vec<_> = analyzer.analyze("Reading BOOKS!").unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(terms, vec!["read", "book"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter, StemFilter};
use crate::analysis::tokenizer::{AlphabeticTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// threads behind an `Arc`.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Filters are applied sequentially in the order they were added.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the name of this analyzer.
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Get the filters in this pipeline.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Get the configured (possibly custom) name of this pipeline.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        // Pipeline names are dynamic; expose a stable identifier instead.
        "pipeline"
    }
}

/// The standard analyzer: alphabetic tokenization, lowercasing, and
/// heuristic suffix stemming.
///
/// # Pipeline
///
/// 1. [`AlphabeticTokenizer`] (splits on non-alphabetic boundaries)
/// 2. [`LowercaseFilter`]
/// 3. [`StemFilter`] (strips `ing`/`ed`/`s` once from words > 3 chars)
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(AlphabeticTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("standard".to_string());

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Create a standard analyzer without the stemming stage.
    pub fn without_stemming() -> Result<Self> {
        let tokenizer = Arc::new(AlphabeticTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard_no_stem".to_string());

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new().expect("Standard analyzer should be creatable with default settings")
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(analyzer: &dyn Analyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_standard_pipeline() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert_eq!(
            terms(&analyzer, "The Cats were Reading"),
            vec!["the", "cat", "were", "read"]
        );
    }

    #[test]
    fn test_standard_skips_non_alphabetic() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert_eq!(terms(&analyzer, "chapter 42: THE END."), vec![
            "chapter", "the", "end"
        ]);
    }

    #[test]
    fn test_without_stemming() {
        let analyzer = StandardAnalyzer::without_stemming().unwrap();
        assert_eq!(terms(&analyzer, "Reading Books"), vec!["reading", "books"]);
    }

    #[test]
    fn test_custom_pipeline() {
        let tokenizer = Arc::new(AlphabeticTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(StemFilter::new()));
        // No lowercase stage: "Reading" keeps its capital R but is stemmed.
        assert_eq!(terms(&analyzer, "Reading books"), vec!["Read", "book"]);
    }

    #[test]
    fn test_empty_text_yields_no_terms() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert!(terms(&analyzer, "").is_empty());
    }
}
