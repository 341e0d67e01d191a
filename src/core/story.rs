//! Story records supplied by the story source

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a story was syndicated from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    /// Local newsroom coverage, preferred for answers
    Local,
    /// Network or wire coverage
    #[default]
    Syndicated,
}

/// Position of a story in the input batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoryId(pub usize);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "story#{}", self.0)
    }
}

/// One news story, treated as read-only input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: SourceTag,
}

impl StoryRecord {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        link: impl Into<String>,
        source: SourceTag,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            link: link.into(),
            source,
        }
    }

    /// Title and summary joined by a space
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}
