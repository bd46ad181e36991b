//! Stemming algorithms for reducing words to their root forms.

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// A heuristic suffix stemmer.
///
/// This is not a dictionary-based stemmer: it applies a single-pass,
/// non-recursive suffix strip to words longer than three characters, in
/// priority order:
///
/// 1. trailing `ing`
/// 2. else trailing `ed`
/// 3. else trailing `s`
///
/// At most one suffix is removed per word. Words of three characters or
/// fewer, and words a strip would reduce to nothing, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use gutensearch::analysis::stemmer::{Stemmer, SuffixStemmer};
///
/// let stemmer = SuffixStemmer::new();
/// assert_eq!(stemmer.stem("reading"), "read");
/// assert_eq!(stemmer.stem("books"), "book");
/// assert_eq!(stemmer.stem("the"), "the");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuffixStemmer;

impl SuffixStemmer {
    /// Create a new suffix stemmer.
    pub fn new() -> Self {
        SuffixStemmer
    }

    /// Strip the first matching suffix, if any.
    ///
    /// Returns `None` when no suffix applies or when stripping would leave
    /// an empty word.
    fn strip_suffix<'a>(&self, word: &'a str) -> Option<&'a str> {
        for suffix in ["ing", "ed", "s"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    return None;
                }
                return Some(stem);
            }
        }
        None
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        if word.chars().count() <= 3 {
            return word.to_string();
        }

        match self.strip_suffix(word) {
            Some(stem) => stem.to_string(),
            None => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_ing() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("reading"), "read");
        assert_eq!(stemmer.stem("going"), "go");
    }

    #[test]
    fn test_strips_ed() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("walked"), "walk");
        // "ed" applies even when the remainder is short
        assert_eq!(stemmer.stem("used"), "us");
    }

    #[test]
    fn test_strips_s() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("books"), "book");
        assert_eq!(stemmer.stem("cats"), "cat");
    }

    #[test]
    fn test_priority_order_is_ing_then_ed_then_s() {
        let stemmer = SuffixStemmer::new();
        // "ings" ends with "s" only after "ing" fails to match; "ing" is
        // checked first, so "kings" loses only the trailing "s".
        assert_eq!(stemmer.stem("kings"), "king");
        // "seeds" ends with "s" (not "ed"), stripped once.
        assert_eq!(stemmer.stem("seeds"), "seed");
    }

    #[test]
    fn test_applies_at_most_once() {
        let stemmer = SuffixStemmer::new();
        // One pass only: "endings" -> "ending", not "end".
        assert_eq!(stemmer.stem("endings"), "ending");
    }

    #[test]
    fn test_short_words_unchanged() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("the"), "the");
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("as"), "as");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn test_four_letter_edge_cases() {
        let stemmer = SuffixStemmer::new();
        // Stripping "ing" from a four-letter word leaves a single letter,
        // which is still non-empty and therefore kept.
        assert_eq!(stemmer.stem("sing"), "s");
        assert_eq!(stemmer.stem("ring"), "r");
    }

    #[test]
    fn test_no_matching_suffix() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("book"), "book");
        assert_eq!(stemmer.stem("story"), "story");
    }
}
