//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Uppercase a token and keep its ASCII letters only
///
/// # Examples
/// ```
/// use mini_crossword::wordlists::loader::normalize_word;
///
/// assert_eq!(normalize_word("Winston-Salem's"), "WINSTONSALEMS");
/// assert_eq!(normalize_word("2026"), "");
/// ```
#[must_use]
pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Load a stopword file, one word per line
///
/// Lines are trimmed and uppercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use mini_crossword::wordlists::loader::load_stopwords;
///
/// let stopwords = load_stopwords("data/stopwords.txt").unwrap();
/// println!("Loaded {} stopwords", stopwords.len());
/// ```
pub fn load_stopwords<P: AsRef<Path>>(path: P) -> io::Result<FxHashSet<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect())
}

/// Convert an embedded string slice to an uppercase word set
///
/// # Examples
/// ```
/// use mini_crossword::wordlists::loader::word_set;
/// use mini_crossword::wordlists::STOPWORDS;
///
/// let stopwords = word_set(STOPWORDS);
/// assert!(stopwords.contains("THE"));
/// ```
#[must_use]
pub fn word_set(slice: &[&str]) -> FxHashSet<String> {
    slice.iter().map(|s| s.trim().to_uppercase()).collect()
}

/// Keep only entries that are uppercase-normalizable A-Z words of `length`
#[must_use]
pub fn vocabulary_of_length(slice: &[&str], length: usize) -> Vec<String> {
    slice
        .iter()
        .filter(|s| s.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|s| s.to_ascii_uppercase())
        .filter(|s| s.len() == length)
        .collect()
}
