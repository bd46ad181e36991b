//! Filter implementations for token transformation.
//!
//! Filters run after the tokenizer and transform the token stream one stage
//! at a time. The standard pipeline lowercases tokens and then applies the
//! heuristic suffix stemmer.

use std::sync::Arc;

use crate::analysis::stemmer::{Stemmer, SuffixStemmer};
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A filter that converts tokens to lowercase.
///
/// # Examples
///
/// ```
/// use gutensearch::analysis::token::Token;
/// use gutensearch::analysis::token_filter::{Filter, LowercaseFilter};
///
/// let filter = LowercaseFilter::new();
/// let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
/// let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert_eq!(filtered[0].text, "hello");
/// assert_eq!(filtered[1].text, "world");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// A filter that stems tokens using a [`Stemmer`].
#[derive(Clone)]
pub struct StemFilter {
    /// The stemming algorithm to apply.
    stemmer: Arc<dyn Stemmer>,
}

impl StemFilter {
    /// Create a new stem filter with the default suffix stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(SuffixStemmer::new()),
        }
    }

    /// Create a new stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        let filtered_tokens = tokens
            .map(|token| {
                let stemmed = stemmer.stem(&token.text);
                token.with_text(stemmed)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
