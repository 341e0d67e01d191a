//! Ranked candidate answers

use super::StoryId;

/// Where in a story a candidate was first seen
///
/// Lower tiers are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OriginTier {
    Title = 1,
    Summary = 2,
    Loose = 3,
}

/// A source-attributed word eligible for placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    /// Uppercase A-Z text
    pub text: String,
    /// Story that first produced this word
    pub source: StoryId,
    pub tier: OriginTier,
    /// Whole-word matches across the story batch
    pub occurrence_count: usize,
}

impl CandidateWord {
    #[must_use]
    pub fn new(text: impl Into<String>, source: StoryId, tier: OriginTier) -> Self {
        Self {
            text: text.into(),
            source,
            tier,
            occurrence_count: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
