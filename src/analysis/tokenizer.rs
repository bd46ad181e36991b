//! Tokenizer implementations for text analysis.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{GutensearchError, Result};

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A regex-based tokenizer that splits text on non-alphabetic boundaries.
///
/// Every maximal run of ASCII letters becomes one token; digits,
/// punctuation, and whitespace all act as separators. Empty fragments are
/// never emitted.
///
/// # Examples
///
/// ```
/// use gutensearch::analysis::tokenizer::{AlphabeticTokenizer, Tokenizer};
///
/// let tokenizer = AlphabeticTokenizer::new().unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("It's 42, isn't it?").unwrap().collect();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
///
/// assert_eq!(texts, vec!["It", "s", "isn", "t", "it"]);
/// ```
#[derive(Clone, Debug)]
pub struct AlphabeticTokenizer {
    /// The regex pattern used to extract tokens.
    pattern: Arc<Regex>,
}

impl AlphabeticTokenizer {
    /// Create a new alphabetic tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"[a-zA-Z]+")
            .map_err(|e| GutensearchError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(AlphabeticTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for AlphabeticTokenizer {
    fn default() -> Self {
        Self::new().expect("Default alphabetic pattern should be valid")
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &AlphabeticTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_splits_on_whitespace_and_punctuation() {
        let tokenizer = AlphabeticTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "the quick, brown-fox."),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_digits_are_boundaries() {
        let tokenizer = AlphabeticTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "abc123def"), vec!["abc", "def"]);
        assert_eq!(texts(&tokenizer, "42"), Vec::<String>::new());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = AlphabeticTokenizer::new().unwrap();
        assert!(texts(&tokenizer, "").is_empty());
        assert!(texts(&tokenizer, "  \t\n ...").is_empty());
    }

    #[test]
    fn test_positions_and_offsets() {
        let tokenizer = AlphabeticTokenizer::new().unwrap();
        let tokens: Vec<_> = tokenizer.tokenize("ab 12 cd").unwrap().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 2);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 8);
    }
}
