//! Candidate words grouped by length, in ranked order

use crate::core::CandidateWord;
use rustc_hash::{FxHashMap, FxHashSet};

/// Ranked words keyed by length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    by_length: FxHashMap<usize, Vec<String>>,
    total: usize,
}

impl WordPool {
    /// Build a pool from words in preference order
    ///
    /// Words are uppercased; non-alphabetic entries and repeats are dropped.
    ///
    /// # Examples
    /// ```
    /// use mini_crossword::solver::WordPool;
    ///
    /// let pool = WordPool::from_words(["radio", "storm", "air", "RADIO"]);
    /// assert_eq!(pool.len(), 3);
    /// assert_eq!(pool.words_of_length(5), ["RADIO".to_string(), "STORM".to_string()]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut pool = Self::default();

        for word in words {
            let word = word.as_ref();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let upper = word.to_ascii_uppercase();
            if seen.insert(upper.clone()) {
                pool.by_length.entry(upper.len()).or_default().push(upper);
                pool.total += 1;
            }
        }

        pool
    }

    /// Build a pool from ranked candidates, keeping their order
    #[must_use]
    pub fn from_candidates(candidates: &[CandidateWord]) -> Self {
        Self::from_words(candidates.iter().map(|c| c.text.as_str()))
    }

    /// Words of exactly `length` letters, most preferred first
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
