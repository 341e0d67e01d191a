//! Story text tokenization

use crate::wordlists::loader::normalize_word;

/// Whitespace-separated tokens, normalized to uppercase letters
///
/// Punctuation inside a token is dropped, so `state-run` becomes `STATERUN`.
pub fn whitespace_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|token| !token.is_empty())
}

/// Maximal runs of ASCII letters, uppercased
///
/// Any non-letter is a boundary, so `state-run` yields `STATE` and `RUN`.
pub fn letter_runs(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_uppercase)
}

/// Whether `word` appears in `text` as a whole word, ignoring case
#[must_use]
pub fn contains_whole_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .any(|token| token.eq_ignore_ascii_case(word))
}
