//! In-memory inverted index over an append-only corpus.

pub mod inverted;
pub mod posting;

pub use inverted::{IndexStats, InvertedIndex};
pub use posting::{DocId, PostingList, difference, intersect};
