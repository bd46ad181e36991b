//! Boolean query implementation: implicit AND over required terms with
//! explicit NOT exclusions.
//!
//! Evaluation intersects the posting lists of all `Must` clauses and then
//! subtracts the posting lists of all `MustNot` clauses. A query with no
//! `Must` clauses never matches anything, so purely negative queries are
//! empty by construction.

use crate::index::inverted::InvertedIndex;
use crate::index::posting::{DocId, difference, intersect};

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    /// The clause must match (implicit AND).
    Must,
    /// The clause must not match (NOT).
    MustNot,
}

/// A clause in a boolean query: one normalized term and its occurrence
/// requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanClause {
    /// The normalized term for this clause.
    pub term: String,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl BooleanClause {
    /// Create a new boolean clause.
    pub fn new<S: Into<String>>(term: S, occur: Occur) -> Self {
        BooleanClause {
            term: term.into(),
            occur,
        }
    }

    /// Create a MUST clause.
    pub fn must<S: Into<String>>(term: S) -> Self {
        BooleanClause::new(term, Occur::Must)
    }

    /// Create a MUST_NOT clause.
    pub fn must_not<S: Into<String>>(term: S) -> Self {
        BooleanClause::new(term, Occur::MustNot)
    }
}

/// A boolean query combining required and excluded terms.
///
/// # Examples
///
/// ```
/// use gutensearch::index::inverted::InvertedIndex;
/// use gutensearch::query::boolean::BooleanQuery;
///
/// let mut index = InvertedIndex::new();
/// index.ingest("the book", 0).unwrap();
/// index.ingest("the story", 1).unwrap();
///
/// let mut query = BooleanQuery::new();
/// query.add_must("the");
/// query.add_must_not("story");
///
/// assert_eq!(query.execute(&index), vec![0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanQuery {
    /// The clauses in this boolean query.
    clauses: Vec<BooleanClause>,
}

impl BooleanQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        BooleanQuery {
            clauses: Vec::new(),
        }
    }

    /// Add a clause to this boolean query.
    pub fn add_clause(&mut self, clause: BooleanClause) {
        self.clauses.push(clause);
    }

    /// Add a MUST clause for the given term.
    pub fn add_must<S: Into<String>>(&mut self, term: S) {
        self.add_clause(BooleanClause::must(term));
    }

    /// Add a MUST_NOT clause for the given term.
    pub fn add_must_not<S: Into<String>>(&mut self, term: S) {
        self.add_clause(BooleanClause::must_not(term));
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[BooleanClause] {
        &self.clauses
    }

    /// Check if this query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Get the terms of all clauses with the given occurrence.
    pub fn terms_by_occur(&self, occur: Occur) -> Vec<&str> {
        self.clauses
            .iter()
            .filter(|c| c.occur == occur)
            .map(|c| c.term.as_str())
            .collect()
    }

    /// Evaluate this query against an index.
    ///
    /// Returns matching document ids in ascending order. With zero `Must`
    /// clauses the result is always empty; a `Must` term absent from the
    /// index short-circuits the whole query to empty.
    pub fn execute(&self, index: &InvertedIndex) -> Vec<DocId> {
        let positives = self.terms_by_occur(Occur::Must);
        if positives.is_empty() {
            return Vec::new();
        }

        let empty: &[DocId] = &[];
        let mut result: Vec<DocId> = match index.postings(positives[0]) {
            Some(list) => list.doc_ids().to_vec(),
            None => return Vec::new(),
        };

        for term in &positives[1..] {
            if result.is_empty() {
                return Vec::new();
            }
            let list = index.postings(term).map(|p| p.doc_ids()).unwrap_or(empty);
            result = intersect(&result, list);
        }

        for term in self.terms_by_occur(Occur::MustNot) {
            if result.is_empty() {
                break;
            }
            if let Some(list) = index.postings(term) {
                result = difference(&result, list.doc_ids());
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index.ingest("the book", 0).unwrap();
        index.ingest("the book story", 1).unwrap();
        index.ingest("the book", 2).unwrap();
        index
    }

    #[test]
    fn test_single_must() {
        let index = sample_index();
        let mut query = BooleanQuery::new();
        query.add_must("story");
        assert_eq!(query.execute(&index), vec![1]);
    }

    #[test]
    fn test_implicit_and() {
        let index = sample_index();
        let mut query = BooleanQuery::new();
        query.add_must("the");
        query.add_must("book");
        assert_eq!(query.execute(&index), vec![0, 1, 2]);

        query.add_must("story");
        assert_eq!(query.execute(&index), vec![1]);
    }

    #[test]
    fn test_must_not_subtracts() {
        let index = sample_index();
        let mut query = BooleanQuery::new();
        query.add_must("the");
        query.add_must_not("story");
        assert_eq!(query.execute(&index), vec![0, 2]);
    }

    #[test]
    fn test_negative_only_is_empty() {
        let index = sample_index();
        let mut query = BooleanQuery::new();
        query.add_must_not("book");
        assert!(query.execute(&index).is_empty());
    }

    #[test]
    fn test_empty_query_is_empty() {
        let index = sample_index();
        let query = BooleanQuery::new();
        assert!(query.execute(&index).is_empty());
    }

    #[test]
    fn test_unknown_must_term_short_circuits() {
        let index = sample_index();
        let mut query = BooleanQuery::new();
        query.add_must("book");
        query.add_must("missing");
        assert!(query.execute(&index).is_empty());
    }

    #[test]
    fn test_unknown_must_not_term_is_ignored() {
        let index = sample_index();
        let mut query = BooleanQuery::new();
        query.add_must("story");
        query.add_must_not("missing");
        assert_eq!(query.execute(&index), vec![1]);
    }

    #[test]
    fn test_result_is_ascending() {
        let mut index = InvertedIndex::new();
        index.ingest("book", 9).unwrap();
        index.ingest("book", 3).unwrap();
        index.ingest("book", 6).unwrap();
        let mut query = BooleanQuery::new();
        query.add_must("book");
        assert_eq!(query.execute(&index), vec![3, 6, 9]);
    }
}
