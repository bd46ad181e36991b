//! Boolean query representation, parsing, and evaluation.

pub mod boolean;
pub mod parser;

pub use boolean::{BooleanClause, BooleanQuery, Occur};
pub use parser::QueryParser;
