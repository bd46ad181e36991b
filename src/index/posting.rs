//! Posting lists and sorted-list set operations.
//!
//! A posting list is the ordered set of document ids in which a term
//! occurs: strictly increasing, no duplicates, regardless of how many
//! times the term appears within one document. Keeping the lists sorted
//! lets boolean evaluation run as linear merges.

use serde::{Deserialize, Serialize};

/// Document identifier.
///
/// Ids are assigned sequentially by the caller starting at 0. Using an
/// unsigned type makes negative ids unrepresentable in the core; the
/// binary boundary reserves -1 as its result sentinel and validates ids
/// on the way in.
pub type DocId = u32;

/// An ordered, duplicate-free list of document ids for one term.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    doc_ids: Vec<DocId>,
}

impl PostingList {
    /// Create a new empty posting list.
    pub fn new() -> Self {
        PostingList {
            doc_ids: Vec::new(),
        }
    }

    /// Insert a document id, preserving ascending order without duplicates.
    ///
    /// Out-of-order and repeated ids are tolerated: a repeated id is a
    /// no-op, and an out-of-order id is placed at its sorted position.
    /// Returns `true` if the id was actually inserted.
    pub fn insert(&mut self, doc_id: DocId) -> bool {
        match self.doc_ids.binary_search(&doc_id) {
            Ok(_) => false,
            Err(pos) => {
                self.doc_ids.insert(pos, doc_id);
                true
            }
        }
    }

    /// Check whether the list contains the given document id.
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.doc_ids.binary_search(&doc_id).is_ok()
    }

    /// Get the document ids as a sorted slice.
    pub fn doc_ids(&self) -> &[DocId] {
        &self.doc_ids
    }

    /// Number of documents in this list.
    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    /// Iterate over the document ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.doc_ids.iter().copied()
    }
}

/// Intersect two sorted id slices into a new sorted vector.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    result
}

/// Subtract the ids in `b` from the sorted slice `a`.
pub fn difference(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() {
        if j >= b.len() || a[i] < b[j] {
            result.push(a[i]);
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut list = PostingList::new();
        assert!(list.insert(5));
        assert!(list.insert(1));
        assert!(list.insert(3));
        assert_eq!(list.doc_ids(), &[1, 3, 5]);
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut list = PostingList::new();
        assert!(list.insert(2));
        assert!(!list.insert(2));
        assert!(!list.insert(2));
        assert_eq!(list.doc_ids(), &[2]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_contains() {
        let mut list = PostingList::new();
        list.insert(0);
        list.insert(7);
        assert!(list.contains(7));
        assert!(!list.contains(3));
    }

    #[test]
    fn test_intersect() {
        assert_eq!(intersect(&[0, 1, 2, 5], &[1, 2, 3]), vec![1, 2]);
        assert_eq!(intersect(&[0, 1], &[2, 3]), Vec::<DocId>::new());
        assert_eq!(intersect(&[], &[1, 2]), Vec::<DocId>::new());
        assert_eq!(intersect(&[1, 2, 3], &[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[0, 1, 2, 3], &[1, 3]), vec![0, 2]);
        assert_eq!(difference(&[0, 1], &[]), vec![0, 1]);
        assert_eq!(difference(&[], &[1]), Vec::<DocId>::new());
        assert_eq!(difference(&[1, 2], &[0, 1, 2, 3]), Vec::<DocId>::new());
    }

    #[test]
    fn test_merge_results_stay_sorted() {
        let a = &[0, 2, 4, 6, 8];
        let b = &[1, 2, 3, 4, 5];
        let inter = intersect(a, b);
        assert!(inter.windows(2).all(|w| w[0] < w[1]));
        let diff = difference(a, b);
        assert!(diff.windows(2).all(|w| w[0] < w[1]));
    }
}
