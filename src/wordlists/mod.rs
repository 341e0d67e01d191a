//! Word lists for crossword construction
//!
//! Provides embedded vocabulary compiled into the binary and loaders for
//! user-provided lists.

mod embedded;
pub mod loader;

pub use embedded::{
    ALTERNATE_CLUE, CURATED_CLUES, DEFAULT_CLUE, DENY_LIST, FALLBACK_WORDS, NEWS_FRIENDLY, STOPWORDS,
    STOPWORDS_COUNT,
};

/// Curated fill words of exactly `length` letters
#[must_use]
pub fn fallback_words(length: usize) -> &'static [&'static str] {
    FALLBACK_WORDS
        .iter()
        .find(|(len, _)| *len == length)
        .map_or(&[], |(_, words)| words)
}

/// Hand-written clue for a curated answer
#[must_use]
pub fn curated_clue(answer: &str) -> Option<&'static str> {
    CURATED_CLUES
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(answer))
        .map(|(_, clue)| *clue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwords_count_matches_const() {
        assert_eq!(STOPWORDS.len(), STOPWORDS_COUNT);
    }

    #[test]
    fn stopwords_are_uppercase() {
        for &word in STOPWORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Stopword '{word}' is not uppercase"
            );
        }
    }

    #[test]
    fn fallback_lookup_returns_matching_lengths() {
        for length in 3..=8 {
            for &word in fallback_words(length) {
                assert!(word.chars().all(|c| c.is_ascii_uppercase()));
                assert_eq!(word.len(), length, "Fallback '{word}' keyed under {length}");
            }
        }
        assert!(fallback_words(2).is_empty());
        assert!(fallback_words(5).contains(&"RADIO"));
    }

    #[test]
    fn curated_clues_never_contain_answer() {
        for &(answer, clue) in CURATED_CLUES {
            assert!(
                !clue.to_uppercase().split(|c: char| !c.is_ascii_alphabetic()).any(|t| t == answer),
                "Clue for '{answer}' reveals the answer"
            );
        }
        assert!(!DEFAULT_CLUE.is_empty());
    }

    #[test]
    fn generic_clues_share_no_word() {
        let words = |clue: &str| -> Vec<String> {
            clue.split(|c: char| !c.is_ascii_alphabetic())
                .filter(|t| !t.is_empty())
                .map(str::to_uppercase)
                .collect()
        };
        let alternate = words(ALTERNATE_CLUE);
        assert!(words(DEFAULT_CLUE).iter().all(|w| !alternate.contains(w)));
    }

    #[test]
    fn curated_clue_lookup_ignores_case() {
        assert_eq!(curated_clue("radio"), Some("Public broadcasting medium"));
        assert_eq!(curated_clue("ZZZ"), None);
    }

    #[test]
    fn deny_list_excluded_from_fallbacks() {
        for length in 3..=8 {
            for word in fallback_words(length) {
                assert!(!DENY_LIST.contains(word));
            }
        }
    }
}
