//! Text analysis pipeline: tokenization, normalization, and stemming.
//!
//! Analysis turns raw document or query text into a stream of normalized
//! terms. The same pipeline is shared by indexing, frequency counting, and
//! query parsing so that all three are keyed on identical terms.
//!
//! # Pipeline
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Terms
//! ```
//!
//! The default pipeline ([`StandardAnalyzer`](analyzer::StandardAnalyzer))
//! splits on non-alphabetic boundaries, lowercases, and applies a heuristic
//! suffix stemmer.

pub mod analyzer;
pub mod stemmer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use stemmer::{Stemmer, SuffixStemmer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, StemFilter};
pub use tokenizer::{AlphabeticTokenizer, Tokenizer};
