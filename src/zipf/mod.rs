//! Corpus-wide term-frequency table and Zipf's-law analysis.

pub mod analyzer;
pub mod csv;
pub mod frequency;

pub use analyzer::{TermFrequency, ZipfReport};
pub use csv::write_zipf_csv;
pub use frequency::FrequencyTable;
