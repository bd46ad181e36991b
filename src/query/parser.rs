//! Query parser for converting query strings into [`BooleanQuery`] objects.
//!
//! # Grammar
//!
//! The query string is split on whitespace. Each token is classified:
//!
//! - the literal token `NOT` marks the following token as excluded;
//! - a token prefixed with `-` is excluded (the prefix is stripped before
//!   normalization);
//! - every other token is required (implicit AND).
//!
//! Tokens then run through the same analyzer used for indexing, so query
//! terms and index keys are always comparable. A token that normalizes to
//! nothing (for example pure punctuation) is skipped; a token that
//! normalizes to several terms contributes each of them with the token's
//! polarity.
//!
//! # Examples
//!
//! ```
//! use gutensearch::query::boolean::Occur;
//! use gutensearch::query::parser::QueryParser;
//!
//! let parser = QueryParser::new().unwrap();
//! let query = parser.parse("whale NOT ahab -ishmael").unwrap();
//!
//! assert_eq!(query.terms_by_occur(Occur::Must), vec!["whale"]);
//! assert_eq!(query.terms_by_occur(Occur::MustNot), vec!["ahab", "ishmael"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::query::boolean::{BooleanClause, BooleanQuery, Occur};

/// A parser that turns query strings into structured boolean queries.
///
/// The parser is deliberately token-based rather than ad hoc string
/// scanning, so extending the grammar (OR, phrases) stays local to this
/// file.
pub struct QueryParser {
    /// The analyzer used to normalize query tokens.
    analyzer: Arc<dyn Analyzer>,
}

impl QueryParser {
    /// Create a new query parser with the standard analyzer.
    pub fn new() -> Result<Self> {
        Ok(QueryParser {
            analyzer: Arc::new(StandardAnalyzer::new()?),
        })
    }

    /// Create a new query parser with a custom analyzer.
    ///
    /// The analyzer must be the one used at indexing time, otherwise query
    /// terms will not line up with index keys.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        QueryParser { analyzer }
    }

    /// Parse a query string into a boolean query.
    ///
    /// Never fails on odd input shapes: an empty string parses to an empty
    /// query, and a trailing `NOT` with nothing after it is ignored.
    pub fn parse(&self, query_str: &str) -> Result<BooleanQuery> {
        let mut query = BooleanQuery::new();
        let mut tokens = query_str.split_whitespace().peekable();

        while let Some(token) = tokens.next() {
            let (raw, occur) = if token == "NOT" {
                match tokens.next() {
                    Some(next) => (next, Occur::MustNot),
                    None => continue,
                }
            } else if let Some(stripped) = token.strip_prefix('-') {
                if stripped.is_empty() {
                    continue;
                }
                (stripped, Occur::MustNot)
            } else {
                (token, Occur::Must)
            };

            for term in self.analyzer.analyze(raw)? {
                query.add_clause(BooleanClause::new(term.text, occur));
            }
        }

        Ok(query)
    }

    /// Get the analyzer used by this parser.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> BooleanQuery {
        QueryParser::new().unwrap().parse(query).unwrap()
    }

    #[test]
    fn test_positive_terms() {
        let query = parse("the book");
        assert_eq!(query.terms_by_occur(Occur::Must), vec!["the", "book"]);
        assert!(query.terms_by_occur(Occur::MustNot).is_empty());
    }

    #[test]
    fn test_not_keyword() {
        let query = parse("the NOT book");
        assert_eq!(query.terms_by_occur(Occur::Must), vec!["the"]);
        assert_eq!(query.terms_by_occur(Occur::MustNot), vec!["book"]);
    }

    #[test]
    fn test_dash_prefix() {
        let query = parse("whale -ahab");
        assert_eq!(query.terms_by_occur(Occur::Must), vec!["whale"]);
        assert_eq!(query.terms_by_occur(Occur::MustNot), vec!["ahab"]);
    }

    #[test]
    fn test_terms_are_normalized() {
        let query = parse("Reading NOT Books");
        assert_eq!(query.terms_by_occur(Occur::Must), vec!["read"]);
        assert_eq!(query.terms_by_occur(Occur::MustNot), vec!["book"]);
    }

    #[test]
    fn test_empty_query() {
        assert!(parse("").is_empty());
        assert!(parse("   \t ").is_empty());
    }

    #[test]
    fn test_trailing_not_is_ignored() {
        let query = parse("book NOT");
        assert_eq!(query.terms_by_occur(Occur::Must), vec!["book"]);
        assert!(query.terms_by_occur(Occur::MustNot).is_empty());
    }

    #[test]
    fn test_bare_dash_is_skipped() {
        let query = parse("- book");
        assert_eq!(query.terms_by_occur(Occur::Must), vec!["book"]);
    }

    #[test]
    fn test_token_with_digits_keeps_alphabetic_runs() {
        let query = parse("chapter42end");
        assert_eq!(query.terms_by_occur(Occur::Must), vec!["chapter", "end"]);
    }

    #[test]
    fn test_punctuation_only_token_is_skipped() {
        let query = parse("book !!! ???");
        assert_eq!(query.clauses().len(), 1);
    }
}
