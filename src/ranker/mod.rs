//! Candidate word extraction and ranking
//!
//! Turns story titles and summaries into a deduplicated, source-attributed,
//! priority-ordered list of answers. The first story to mention a word owns
//! its attribution.

mod ranking;
pub mod tokenize;

pub use ranking::{compare_candidates, sort_candidates};

use crate::core::{CandidateWord, OriginTier, StoryId, StoryRecord};
use crate::wordlists::loader::word_set;
use crate::wordlists::{DENY_LIST, NEWS_FRIENDLY, STOPWORDS};
use rustc_hash::{FxHashMap, FxHashSet};
use std::ops::RangeInclusive;
use tokenize::{letter_runs, whitespace_tokens};
use tracing::debug;

/// Token lengths kept by the primary pass
pub const PRIMARY_LENGTHS: RangeInclusive<usize> = 3..=8;

/// Token lengths kept by the loosened pass
pub const LOOSE_LENGTHS: RangeInclusive<usize> = 3..=6;

/// Default size below which the loosened pass runs
pub const DEFAULT_MIN_VIABLE: usize = 10;

/// Candidate extractor with curated word sets
#[derive(Debug, Clone)]
pub struct CandidateRanker {
    stopwords: FxHashSet<String>,
    news_friendly: FxHashSet<String>,
    deny_list: FxHashSet<String>,
    min_viable: usize,
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(word_set(STOPWORDS))
    }
}

impl CandidateRanker {
    /// Create a ranker with the given stopwords and the curated keyword sets
    #[must_use]
    pub fn new(stopwords: FxHashSet<String>) -> Self {
        Self {
            stopwords: stopwords.into_iter().map(|w| w.to_uppercase()).collect(),
            news_friendly: word_set(NEWS_FRIENDLY),
            deny_list: word_set(DENY_LIST),
            min_viable: DEFAULT_MIN_VIABLE,
        }
    }

    /// Set the list size below which loosened re-extraction runs
    #[must_use]
    pub const fn with_min_viable(mut self, min_viable: usize) -> Self {
        self.min_viable = min_viable;
        self
    }

    /// Add stopwords on top of the current set
    #[must_use]
    pub fn with_extra_stopwords(mut self, extra: impl IntoIterator<Item = String>) -> Self {
        self.stopwords
            .extend(extra.into_iter().map(|w| w.to_uppercase()));
        self
    }

    /// Extract and rank candidates from `stories`
    ///
    /// # Examples
    /// ```
    /// use mini_crossword::core::{SourceTag, StoryRecord};
    /// use mini_crossword::ranker::CandidateRanker;
    ///
    /// let stories = vec![StoryRecord::new("Storm floods river", "", "", SourceTag::Local)];
    /// let ranked = CandidateRanker::default().with_min_viable(0).rank(&stories);
    ///
    /// let words: Vec<&str> = ranked.iter().map(|c| c.text.as_str()).collect();
    /// assert_eq!(words, vec!["RIVER", "STORM", "FLOODS"]);
    /// ```
    #[must_use]
    pub fn rank(&self, stories: &[StoryRecord]) -> Vec<CandidateWord> {
        let counts = occurrence_counts(stories, |text| whitespace_tokens(text).collect());
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut ranked = Vec::new();

        for (index, story) in stories.iter().enumerate() {
            for (tier, text) in [
                (OriginTier::Title, story.title.as_str()),
                (OriginTier::Summary, story.summary.as_str()),
            ] {
                for token in whitespace_tokens(text) {
                    if self.accepts(&token, &PRIMARY_LENGTHS) && seen.insert(token.clone()) {
                        ranked.push(attributed(token, StoryId(index), tier, &counts));
                    }
                }
            }
        }

        sort_candidates(&mut ranked, stories, &self.news_friendly);
        debug!(candidates = ranked.len(), "Primary extraction complete");

        if ranked.len() < self.min_viable {
            let before = ranked.len();
            let loose_counts = occurrence_counts(stories, |text| letter_runs(text).collect());
            for (index, story) in stories.iter().enumerate() {
                for token in letter_runs(&story.full_text()) {
                    if self.accepts(&token, &LOOSE_LENGTHS) && seen.insert(token.clone()) {
                        ranked.push(attributed(
                            token,
                            StoryId(index),
                            OriginTier::Loose,
                            &loose_counts,
                        ));
                    }
                }
            }
            debug!(
                added = ranked.len() - before,
                min_viable = self.min_viable,
                "Loosened re-extraction"
            );
        }

        ranked
    }

    fn accepts(&self, token: &str, lengths: &RangeInclusive<usize>) -> bool {
        lengths.contains(&token.len())
            && token.chars().all(|c| c.is_ascii_uppercase())
            && !self.stopwords.contains(token)
            && !self.deny_list.contains(token)
    }
}

fn attributed(
    text: String,
    source: StoryId,
    tier: OriginTier,
    counts: &FxHashMap<String, usize>,
) -> CandidateWord {
    let occurrence_count = counts.get(&text).copied().unwrap_or(0);
    CandidateWord {
        text,
        source,
        tier,
        occurrence_count,
    }
}

/// Whole-word occurrence counts over every story's title and summary
///
/// `split` must tokenize the same way the pass being counted does.
fn occurrence_counts<F>(stories: &[StoryRecord], split: F) -> FxHashMap<String, usize>
where
    F: Fn(&str) -> Vec<String>,
{
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for story in stories {
        for token in split(&story.full_text()) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

/// Map each candidate's text to the story that owns it
#[must_use]
pub fn attribution_index(candidates: &[CandidateWord]) -> FxHashMap<String, StoryId> {
    candidates
        .iter()
        .map(|c| (c.text.clone(), c.source))
        .collect()
}
