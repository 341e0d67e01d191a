//! Heuristic clue synthesis
//!
//! Finds a story sentence that uses the answer, blanks it out, and trims the
//! result for display. Falls back to the curated clue table and finally the
//! default clue. No returned clue contains the answer as a whole word.

use crate::core::StoryRecord;
use crate::ranker::tokenize::contains_whole_word;
use crate::wordlists::{ALTERNATE_CLUE, DEFAULT_CLUE, curated_clue};

/// Marker that replaces the answer in a sentence
pub const BLANK: &str = "___";

/// Marker appended to truncated clues
pub const ELLIPSIS: &str = "...";

/// Leading words never folded into a proper-noun phrase
const PHRASE_SKIP: &[&str] = &["A", "AN", "THE"];

/// Build a clue for `answer` without any provider
///
/// `preferred` is searched before the rest of `stories`.
#[must_use]
pub fn heuristic_clue(
    answer: &str,
    preferred: Option<&StoryRecord>,
    stories: &[StoryRecord],
    max_len: usize,
) -> String {
    let texts = preferred
        .into_iter()
        .chain(stories)
        .flat_map(|story| [story.title.as_str(), story.summary.as_str()]);

    for text in texts {
        for sentence in sentences(text) {
            if !contains_whole_word(sentence, answer) {
                continue;
            }
            let clue = truncate_display(&blank_answer(sentence, answer), max_len);
            if is_usable(&clue, answer) {
                return clue;
            }
        }
    }

    curated_clue(answer)
        .into_iter()
        .chain([DEFAULT_CLUE, ALTERNATE_CLUE])
        .find(|clue| !contains_whole_word(clue, answer))
        .unwrap_or(ALTERNATE_CLUE)
        .to_string()
}

/// Split text into trimmed, non-empty sentences
fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Byte spans of ASCII letter runs
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, ch) in text.char_indices() {
        match (ch.is_ascii_alphabetic(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Replace every occurrence of `answer` with [`BLANK`]
///
/// A capitalized occurrence inside a run of capitalized words, such as
/// `Yadkin River`, blanks the whole phrase. The phrase never takes in the
/// sentence-initial word, and Title-Case headlines blank the bare word only.
#[must_use]
pub fn blank_answer(sentence: &str, answer: &str) -> String {
    let spans = word_spans(sentence);
    let word = |k: usize| &sentence[spans[k].0..spans[k].1];
    let joined_by_space =
        |left: usize, right: usize| &sentence[spans[left].1..spans[right].0] == " ";
    let in_phrase = |k: usize| {
        let w = word(k);
        is_capitalized(w) && !PHRASE_SKIP.iter().any(|skip| w.eq_ignore_ascii_case(skip))
    };

    let title_case = spans.len() > 1
        && (0..spans.len()).all(|k| is_capitalized(word(k)) || word(k).len() <= 3);

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for k in 0..spans.len() {
        if !word(k).eq_ignore_ascii_case(answer) {
            continue;
        }

        let (mut first, mut last) = (k, k);
        if !title_case && in_phrase(k) {
            while first > 1 && in_phrase(first - 1) && joined_by_space(first - 1, first) {
                first -= 1;
            }
            while last + 1 < spans.len() && in_phrase(last + 1) && joined_by_space(last, last + 1) {
                last += 1;
            }
        }

        let range = (spans[first].0, spans[last].1);
        match ranges.last_mut() {
            Some(prev) if prev.1 >= range.0 => prev.1 = prev.1.max(range.1),
            _ => ranges.push(range),
        }
    }

    let mut out = String::with_capacity(sentence.len());
    let mut cursor = 0;
    for (start, end) in ranges {
        out.push_str(&sentence[cursor..start]);
        out.push_str(BLANK);
        cursor = end;
    }
    out.push_str(&sentence[cursor..]);
    out
}

/// Truncate to `max_len` characters, ending with [`ELLIPSIS`] when cut
#[must_use]
pub fn truncate_display(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let head: String = text.chars().take(keep).collect();
    format!("{}{ELLIPSIS}", head.trim_end())
}

/// A clue must hide the answer and say something besides the blank
fn is_usable(clue: &str, answer: &str) -> bool {
    let letters = clue.replace(BLANK, "").chars().filter(char::is_ascii_alphabetic).count();
    letters >= 3 && !contains_whole_word(clue, answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceTag;

    fn story(title: &str, summary: &str) -> StoryRecord {
        StoryRecord::new(title, summary, "https://local.example/1", SourceTag::Local)
    }

    #[test]
    fn blanks_plain_occurrence() {
        assert_eq!(
            blank_answer("Crews clear storm debris downtown", "STORM"),
            "Crews clear ___ debris downtown"
        );
    }

    #[test]
    fn blanks_every_occurrence() {
        assert_eq!(
            blank_answer("Storm after storm hits", "storm"),
            "___ after ___ hits"
        );
    }

    #[test]
    fn blanks_proper_noun_phrase() {
        assert_eq!(
            blank_answer("The Yadkin River rose overnight", "RIVER"),
            "The ___ rose overnight"
        );
        assert_eq!(
            blank_answer("Visitors flock to Hanging Rock State Park", "ROCK"),
            "Visitors flock to ___"
        );
    }

    #[test]
    fn sentence_initial_capital_is_not_a_phrase() {
        assert_eq!(
            blank_answer("Council approves budget", "COUNCIL"),
            "___ approves budget"
        );
    }

    #[test]
    fn title_case_headline_blanks_only_the_answer() {
        assert_eq!(
            blank_answer("Storm Damages Local Bridge", "BRIDGE"),
            "Storm Damages Local ___"
        );
        assert_eq!(
            blank_answer("Mayor Opens New Trail at Park", "TRAIL"),
            "Mayor Opens New ___ at Park"
        );

        let stories = vec![story("Storm Damages Local Bridge", "")];
        assert_eq!(
            heuristic_clue("BRIDGE", None, &stories, 60),
            "Storm Damages Local ___"
        );
    }

    #[test]
    fn phrase_stops_before_sentence_initial_word() {
        assert_eq!(
            blank_answer("Hanging Rock draws crowds", "ROCK"),
            "Hanging ___ draws crowds"
        );
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_display("short", 10), "short");
        assert_eq!(truncate_display("a long sentence here", 10), "a long...");
    }

    #[test]
    fn heuristic_uses_matching_sentence() {
        let stories = vec![story("Bakery opens", "Crews clear storm debris. Mayor speaks.")];
        let clue = heuristic_clue("STORM", None, &stories, 60);
        assert_eq!(clue, "Crews clear ___ debris");
    }

    #[test]
    fn heuristic_prefers_source_story() {
        let stories = vec![
            story("Storm season begins", ""),
            story("Crews clear storm debris", ""),
        ];
        let clue = heuristic_clue("STORM", Some(&stories[1]), &stories, 60);
        assert_eq!(clue, "Crews clear ___ debris");
    }

    #[test]
    fn heuristic_falls_back_to_curated_then_default() {
        assert_eq!(
            heuristic_clue("RADIO", None, &[], 60),
            "Public broadcasting medium"
        );
        assert_eq!(heuristic_clue("QWXYZ", None, &[], 60), DEFAULT_CLUE);
    }

    #[test]
    fn default_clue_swaps_when_it_names_the_answer() {
        for answer in ["TODAY", "COVERAGE", "today"] {
            let clue = heuristic_clue(answer, None, &[], 60);
            assert_eq!(clue, ALTERNATE_CLUE);
            assert!(!contains_whole_word(&clue, answer), "{answer}: {clue}");
        }
        for answer in ["LOCAL", "HEADLINES"] {
            assert_eq!(heuristic_clue(answer, None, &[], 60), DEFAULT_CLUE);
        }
    }

    #[test]
    fn heuristic_skips_sentences_that_are_only_the_answer() {
        let stories = vec![story("Storm!", "")];
        assert_eq!(heuristic_clue("STORM", None, &stories, 60), DEFAULT_CLUE);
    }

    #[test]
    fn truncation_cannot_reveal_the_answer() {
        // Cutting "riverside" to "river..." would expose the answer
        let stories = vec![story("The river and the riverside trail", "")];
        let clue = heuristic_clue("RIVER", None, &stories, 11);
        assert!(!contains_whole_word(&clue, "RIVER"), "{clue}");
    }

    #[test]
    fn heuristic_never_contains_answer() {
        let stories = vec![story(
            "River Road closes as the river floods",
            "Officials said the RIVER crested at noon. Residents along River Road evacuated!",
        )];
        for answer in ["RIVER", "ROAD", "NOON", "FLOODS", "CITY"] {
            let clue = heuristic_clue(answer, None, &stories, 60);
            assert!(!contains_whole_word(&clue, answer), "{answer}: {clue}");
        }
    }
}
