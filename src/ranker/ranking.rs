//! Candidate ordering
//!
//! Precedence, most significant first: local source, news-friendly keyword,
//! origin tier, rarity within the batch, then alphabetical.

use crate::core::{CandidateWord, SourceTag, StoryRecord};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Compare two candidates for ranking
#[must_use]
pub fn compare_candidates(
    a: &CandidateWord,
    b: &CandidateWord,
    stories: &[StoryRecord],
    news_friendly: &FxHashSet<String>,
) -> Ordering {
    let is_local = |c: &CandidateWord| {
        stories
            .get(c.source.0)
            .is_some_and(|story| story.source == SourceTag::Local)
    };

    is_local(b)
        .cmp(&is_local(a))
        .then_with(|| news_friendly.contains(&b.text).cmp(&news_friendly.contains(&a.text)))
        .then_with(|| a.tier.cmp(&b.tier))
        .then_with(|| a.occurrence_count.cmp(&b.occurrence_count))
        .then_with(|| a.text.cmp(&b.text))
}

/// Sort candidates in place by [`compare_candidates`]
pub fn sort_candidates(
    candidates: &mut [CandidateWord],
    stories: &[StoryRecord],
    news_friendly: &FxHashSet<String>,
) {
    candidates.sort_by(|a, b| compare_candidates(a, b, stories, news_friendly));
}
